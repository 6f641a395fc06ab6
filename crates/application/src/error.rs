use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use photo_sorter_domain::DomainError;

#[derive(Debug)]
pub enum ApplicationError {
    Domain(DomainError),
    InvalidInput(String),
    NotFound(String),
    EmptyCatalog(PathBuf),
    MoveConflict(PathBuf),
    SortingComplete,
    Cancelled,
    Io(String),
    Decode(String),
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::EmptyCatalog(folder) => {
                write!(f, "no photos to sort in {}", folder.display())
            }
            Self::MoveConflict(path) => {
                write!(f, "cannot move file, {} already exists", path.display())
            }
            Self::SortingComplete => write!(f, "all photos are already sorted"),
            Self::Cancelled => write!(f, "folder selection cancelled"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApplicationError {}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}
