use std::path::Path;

use photo_sorter_domain::{detect_photo_kind, Catalog};

use crate::{ApplicationError, FileSystem};

/// Collects sortable photos and target subdirectories directly under `folder`.
///
/// A folder without photos yields [`ApplicationError::EmptyCatalog`], which
/// callers treat as "nothing to do" rather than a failure.
pub fn load_catalog(fs: &dyn FileSystem, folder: &Path) -> Result<Catalog, ApplicationError> {
    let photos: Vec<_> = fs
        .list_files(folder)?
        .into_iter()
        .filter(|path| detect_photo_kind(path).is_sortable())
        .collect();

    if photos.is_empty() {
        return Err(ApplicationError::EmptyCatalog(folder.to_path_buf()));
    }

    let targets = fs.list_subdirectories(folder)?;
    Ok(Catalog::new(folder.to_path_buf(), photos, targets))
}
