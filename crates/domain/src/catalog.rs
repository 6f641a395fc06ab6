use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Photos waiting to be sorted and the subdirectories they can be sorted into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub folder: PathBuf,
    pub photos: Vec<PathBuf>,
    pub targets: Vec<PathBuf>,
}

impl Catalog {
    pub fn new(folder: PathBuf, photos: Vec<PathBuf>, targets: Vec<PathBuf>) -> Self {
        Self {
            folder,
            photos,
            targets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Last path component, as shown in the selection list.
pub fn target_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
