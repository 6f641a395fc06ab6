mod catalog;
mod error;
mod naming;
mod photo;
mod sort;

pub use catalog::{target_name, Catalog};
pub use error::DomainError;
pub use naming::numbered_file_name;
pub use photo::{detect_photo_kind, DecodedPhoto, PhotoKind};
pub use sort::{MoveRecord, SortState, UndoDirection};
