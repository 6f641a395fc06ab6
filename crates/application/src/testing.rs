use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use photo_sorter_domain::{detect_photo_kind, DecodedPhoto};

use crate::{
    ApplicationError, FileSystem, FolderChoice, FolderPicker, ImageDecoder, PromptResponse,
};

#[derive(Debug, Clone)]
struct FakeEntry {
    path: PathBuf,
    is_dir: bool,
}

/// In-memory tree keeping insertion order as listing order.
#[derive(Default)]
pub struct FakeFileSystem {
    entries: RefCell<Vec<FakeEntry>>,
    pub renames: RefCell<Vec<(PathBuf, PathBuf)>>,
    pub fail_renames: Cell<bool>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if parent.parent().is_some() && !self.is_dir(parent) {
                self.add_dir(parent.to_path_buf());
            }
        }
        if !self.exists(&path) {
            self.entries.borrow_mut().push(FakeEntry { path, is_dir: true });
        }
    }

    pub fn add_file(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.entries.borrow_mut().push(FakeEntry {
            path,
            is_dir: false,
        });
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|entry| entry.is_dir && entry.path == path)
    }

    fn children(&self, dir: &Path, want_dirs: bool) -> Result<Vec<PathBuf>, ApplicationError> {
        if !self.is_dir(dir) {
            return Err(ApplicationError::NotFound(format!(
                "folder does not exist or is not a directory: {}",
                dir.display()
            )));
        }
        Ok(self
            .entries
            .borrow()
            .iter()
            .filter(|entry| entry.is_dir == want_dirs && entry.path.parent() == Some(dir))
            .map(|entry| entry.path.clone())
            .collect())
    }
}

impl FileSystem for FakeFileSystem {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ApplicationError> {
        self.children(dir, false)
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>, ApplicationError> {
        self.children(dir, true)
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.borrow().iter().any(|entry| entry.path == path)
    }

    fn rename(&self, source: &Path, destination: &Path) -> Result<(), ApplicationError> {
        if self.fail_renames.get() {
            return Err(ApplicationError::Io("rename refused by fake".to_string()));
        }
        let parent_ok = destination.parent().map(|p| self.is_dir(p)).unwrap_or(false);
        if !parent_ok {
            return Err(ApplicationError::Io(format!(
                "destination folder missing: {}",
                destination.display()
            )));
        }
        let mut entries = self.entries.borrow_mut();
        let entry = entries
            .iter_mut()
            .find(|entry| entry.path == source)
            .ok_or_else(|| ApplicationError::Io(format!("no such file: {}", source.display())))?;
        entry.path = destination.to_path_buf();
        self.renames
            .borrow_mut()
            .push((source.to_path_buf(), destination.to_path_buf()));
        Ok(())
    }
}

pub struct FakeDecoder;

impl ImageDecoder for FakeDecoder {
    fn decode_for_preview(
        &self,
        path: &Path,
        max_width: u32,
        max_height: u32,
    ) -> Result<DecodedPhoto, ApplicationError> {
        let width = max_width.min(4);
        let height = max_height.min(3);
        Ok(DecodedPhoto {
            width,
            height,
            kind: detect_photo_kind(path),
            pixels: vec![0x00FF00; (width * height) as usize],
        })
    }
}

/// Replays scripted folder choices; answers every notice with `response`.
pub struct ScriptedPicker {
    choices: RefCell<VecDeque<FolderChoice>>,
    response: PromptResponse,
    pub notices: RefCell<Vec<String>>,
}

impl ScriptedPicker {
    pub fn new(choices: Vec<FolderChoice>, response: PromptResponse) -> Self {
        Self {
            choices: RefCell::new(choices.into()),
            response,
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl FolderPicker for ScriptedPicker {
    fn pick_folder(&self) -> FolderChoice {
        self.choices
            .borrow_mut()
            .pop_front()
            .unwrap_or(FolderChoice::Empty)
    }

    fn notify(&self, message: &str) -> PromptResponse {
        self.notices.borrow_mut().push(message.to_string());
        if self.choices.borrow().is_empty() {
            return PromptResponse::GiveUp;
        }
        self.response
    }
}
