use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One applied rename. Undo/redo swaps the two ends instead of clearing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl MoveRecord {
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn swapped(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortState {
    Sorting { cursor: usize, total: usize },
    Complete { total: usize },
}

impl SortState {
    pub fn from_cursor(cursor: usize, total: usize) -> Self {
        if cursor >= total {
            Self::Complete { total }
        } else {
            Self::Sorting { cursor, total }
        }
    }

    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoDirection {
    Undo,
    Redo,
}
