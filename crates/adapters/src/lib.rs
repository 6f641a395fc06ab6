pub mod fs;
pub mod presenters;
pub mod preview;

pub use fs::LocalFileSystem;
pub use presenters::{
    present_catalog, present_catalog_json, present_move, present_state, present_target_row,
    present_undo,
};
pub use preview::ImageCrateDecoder;
