use photo_sorter_domain::{Catalog, DecodedPhoto};
use tracing::{debug, info, warn};

use crate::{
    load_catalog, ApplicationError, ChooseFolderCommand, FileSystem, FolderChoice, FolderPicker,
    ImageDecoder, LoadCatalogCommand, MoveOutcome, MovePhotoCommand, PreviewPhotoCommand,
    PromptResponse, SortEngine, UndoOutcome, UndoRedoCommand,
};

/// What a session starts with once a folder has been chosen.
#[derive(Debug)]
pub enum SessionStart {
    Ready(SortEngine),
    Empty(std::path::PathBuf),
}

pub struct ApplicationService {
    fs: Box<dyn FileSystem>,
    decoder: Box<dyn ImageDecoder>,
}

impl ApplicationService {
    pub fn new(fs: Box<dyn FileSystem>, decoder: Box<dyn ImageDecoder>) -> Self {
        Self { fs, decoder }
    }

    pub fn load_catalog(&self, command: LoadCatalogCommand) -> Result<Catalog, ApplicationError> {
        if command.folder.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "folder path must not be empty".to_string(),
            ));
        }

        let catalog = load_catalog(self.fs.as_ref(), &command.folder)?;
        info!(
            folder = %catalog.folder.display(),
            photos = catalog.photos.len(),
            targets = catalog.targets.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn start_session(
        &self,
        command: LoadCatalogCommand,
    ) -> Result<SessionStart, ApplicationError> {
        match self.load_catalog(command) {
            Ok(catalog) => Ok(SessionStart::Ready(SortEngine::new(catalog))),
            Err(ApplicationError::EmptyCatalog(folder)) => {
                info!(folder = %folder.display(), "no photos to sort");
                Ok(SessionStart::Empty(folder))
            }
            Err(error) => Err(error),
        }
    }

    /// Keeps asking for a folder until one loads. Empty answers and missing
    /// folders re-prompt; only the user giving up ends the loop early.
    pub fn choose_folder(
        &self,
        picker: &dyn FolderPicker,
        _command: ChooseFolderCommand,
    ) -> Result<SessionStart, ApplicationError> {
        loop {
            let notice = match picker.pick_folder() {
                FolderChoice::Selected(folder) if !folder.as_os_str().is_empty() => {
                    match self.start_session(LoadCatalogCommand { folder }) {
                        Err(ApplicationError::NotFound(msg)) => format!("Folder not found: {msg}"),
                        other => return other,
                    }
                }
                FolderChoice::Selected(_) | FolderChoice::Empty => "Path needed".to_string(),
            };

            warn!(%notice, "re-prompting for folder");
            if picker.notify(&notice) == PromptResponse::GiveUp {
                return Err(ApplicationError::Cancelled);
            }
        }
    }

    pub fn move_photo(
        &self,
        engine: &mut SortEngine,
        command: MovePhotoCommand,
    ) -> Result<MoveOutcome, ApplicationError> {
        let outcome = engine.move_current(self.fs.as_ref(), command.target_index)?;
        info!(
            from = %outcome.record.source.display(),
            to = %outcome.record.destination.display(),
            state = ?outcome.state,
            "photo moved"
        );
        Ok(outcome)
    }

    pub fn undo_redo(
        &self,
        engine: &mut SortEngine,
        _command: UndoRedoCommand,
    ) -> Result<Option<UndoOutcome>, ApplicationError> {
        let outcome = engine.undo_redo(self.fs.as_ref())?;
        match &outcome {
            Some(outcome) => info!(
                direction = ?outcome.direction,
                from = %outcome.record.source.display(),
                to = %outcome.record.destination.display(),
                state = ?outcome.state,
                "undo/redo applied"
            ),
            None => debug!("undo/redo ignored, nothing moved yet"),
        }
        Ok(outcome)
    }

    /// `Ok(None)` once every photo is sorted.
    pub fn preview_current(
        &self,
        engine: &SortEngine,
        command: PreviewPhotoCommand,
    ) -> Result<Option<DecodedPhoto>, ApplicationError> {
        let Some(path) = engine.current_photo() else {
            return Ok(None);
        };
        self.decoder
            .decode_for_preview(path, command.max_width, command.max_height)
            .map(Some)
    }
}
