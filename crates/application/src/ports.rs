use std::path::{Path, PathBuf};

use photo_sorter_domain::DecodedPhoto;

use crate::ApplicationError;

/// Listing order is the order photos are presented and targets are indexed.
pub trait FileSystem {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ApplicationError>;

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>, ApplicationError>;

    fn exists(&self, path: &Path) -> bool;

    fn rename(&self, source: &Path, destination: &Path) -> Result<(), ApplicationError>;
}

pub trait ImageDecoder {
    /// Reads the whole file and returns pixels scaled to fit the bounds. No
    /// handle on `path` outlives the call.
    fn decode_for_preview(
        &self,
        path: &Path,
        max_width: u32,
        max_height: u32,
    ) -> Result<DecodedPhoto, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderChoice {
    Selected(PathBuf),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    Retry,
    GiveUp,
}

pub trait FolderPicker {
    fn pick_folder(&self) -> FolderChoice;

    fn notify(&self, message: &str) -> PromptResponse;
}
