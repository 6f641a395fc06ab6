use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    TargetIndexOutOfRange { index: usize, len: usize },
    MissingFileName(PathBuf),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetIndexOutOfRange { index, len } => {
                write!(f, "target index {index} is out of range for {len} targets")
            }
            Self::MissingFileName(path) => write!(f, "path has no file name: {}", path.display()),
        }
    }
}

impl std::error::Error for DomainError {}
