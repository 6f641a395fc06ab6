use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LoadCatalogCommand {
    pub folder: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ChooseFolderCommand;

#[derive(Debug, Clone, Copy)]
pub struct MovePhotoCommand {
    pub target_index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct UndoRedoCommand;

#[derive(Debug, Clone, Copy)]
pub struct PreviewPhotoCommand {
    pub max_width: u32,
    pub max_height: u32,
}
