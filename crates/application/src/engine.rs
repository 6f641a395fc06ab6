use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use photo_sorter_domain::{
    numbered_file_name, target_name, Catalog, DomainError, MoveRecord, SortState, UndoDirection,
};

use crate::{ApplicationError, FileSystem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub state: SortState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    pub direction: UndoDirection,
    pub record: MoveRecord,
    pub state: SortState,
}

/// Walks the photo queue one entry at a time.
///
/// The queue and targets never change after construction; only the cursor and
/// the last applied move do, and only through [`SortEngine::move_current`] and
/// [`SortEngine::undo_redo`].
#[derive(Debug, Clone)]
pub struct SortEngine {
    photos: Vec<PathBuf>,
    targets: Vec<PathBuf>,
    cursor: usize,
    last_move: Option<MoveRecord>,
}

impl SortEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            photos: catalog.photos,
            targets: catalog.targets,
            cursor: 0,
            last_move: None,
        }
    }

    pub fn state(&self) -> SortState {
        SortState::from_cursor(self.cursor, self.photos.len())
    }

    pub fn is_complete(&self) -> bool {
        self.state().is_complete()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn photos(&self) -> &[PathBuf] {
        &self.photos
    }

    pub fn target_names(&self) -> Vec<String> {
        self.targets.iter().map(|path| target_name(path)).collect()
    }

    pub fn current_photo(&self) -> Option<&Path> {
        self.photos.get(self.cursor).map(PathBuf::as_path)
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Moves the current photo into `targets[target_index]` and advances.
    ///
    /// Occupied names are tried as `name(1).ext`, `name(2).ext`, ... and the
    /// rename is issued once, against the first free name.
    pub fn move_current(
        &mut self,
        fs: &dyn FileSystem,
        target_index: usize,
    ) -> Result<MoveOutcome, ApplicationError> {
        let source = self
            .current_photo()
            .ok_or(ApplicationError::SortingComplete)?
            .to_path_buf();
        let target = self
            .targets
            .get(target_index)
            .ok_or(DomainError::TargetIndexOutOfRange {
                index: target_index,
                len: self.targets.len(),
            })?;
        let file_name = source
            .file_name()
            .ok_or_else(|| DomainError::MissingFileName(source.clone()))?;

        let destination = free_destination(fs, target, file_name);
        fs.rename(&source, &destination)?;

        let record = MoveRecord::new(source, destination);
        self.last_move = Some(record.clone());
        self.cursor += 1;

        Ok(MoveOutcome {
            record,
            state: self.state(),
        })
    }

    /// Reverses the last move, or re-applies it if it was just reversed.
    ///
    /// Direction is inferred from the queue: a file leaving one of its original
    /// paths is a redo, anything else is an undo. Unlike `move_current`, an
    /// occupied destination is an error rather than a reason to rename.
    pub fn undo_redo(
        &mut self,
        fs: &dyn FileSystem,
    ) -> Result<Option<UndoOutcome>, ApplicationError> {
        let Some(last) = self.last_move.as_ref() else {
            return Ok(None);
        };

        let record = last.swapped();
        if fs.exists(&record.destination) {
            return Err(ApplicationError::MoveConflict(record.destination));
        }
        fs.rename(&record.source, &record.destination)?;

        let direction = if self.photos.contains(&record.source) {
            self.cursor += 1;
            UndoDirection::Redo
        } else {
            self.cursor = self.cursor.saturating_sub(1);
            UndoDirection::Undo
        };
        self.last_move = Some(record.clone());

        Ok(Some(UndoOutcome {
            direction,
            record,
            state: self.state(),
        }))
    }
}

fn free_destination(fs: &dyn FileSystem, target: &Path, file_name: &OsStr) -> PathBuf {
    let mut candidate = target.join(file_name);
    let mut n = 1;
    while fs.exists(&candidate) {
        candidate = target.join(numbered_file_name(file_name, n));
        n += 1;
    }
    candidate
}
