mod engine;
mod error;
mod loader;
mod ports;
mod service;
mod use_cases;

#[cfg(test)]
mod testing;

pub use engine::{MoveOutcome, SortEngine, UndoOutcome};
pub use error::ApplicationError;
pub use loader::load_catalog;
pub use ports::{FileSystem, FolderChoice, FolderPicker, ImageDecoder, PromptResponse};
pub use service::{ApplicationService, SessionStart};
pub use use_cases::{
    ChooseFolderCommand, LoadCatalogCommand, MovePhotoCommand, PreviewPhotoCommand,
    UndoRedoCommand,
};
