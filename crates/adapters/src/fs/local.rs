use std::fs;
use std::path::{Path, PathBuf};

use photo_sorter_application::{ApplicationError, FileSystem};
use tracing::warn;
use walkdir::WalkDir;

/// Direct children only, sorted by file name so the queue order is stable
/// across platforms.
#[derive(Debug, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    fn children(&self, dir: &Path, want_dirs: bool) -> Result<Vec<PathBuf>, ApplicationError> {
        if !dir.is_dir() {
            return Err(ApplicationError::NotFound(format!(
                "folder does not exist or is not a directory: {}",
                dir.display()
            )));
        }

        let mut children = Vec::new();
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) if error.depth() == 0 => {
                    return Err(ApplicationError::NotFound(format!(
                        "cannot read folder {}: {error}",
                        dir.display()
                    )));
                }
                Err(error) => {
                    warn!(%error, "skipping unreadable entry");
                    continue;
                }
            };

            let file_type = entry.file_type();
            let keep = if want_dirs {
                file_type.is_dir()
            } else {
                file_type.is_file()
            };
            if keep {
                children.push(entry.into_path());
            }
        }

        Ok(children)
    }
}

impl FileSystem for LocalFileSystem {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ApplicationError> {
        self.children(dir, false)
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>, ApplicationError> {
        self.children(dir, true)
    }

    // Dangling symlinks count as taken so a move never replaces them.
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, source: &Path, destination: &Path) -> Result<(), ApplicationError> {
        fs::rename(source, destination).map_err(|error| {
            ApplicationError::Io(format!(
                "failed to move {} to {}: {error}",
                source.display(),
                destination.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_sorter_application::{load_catalog, SortEngine};
    use photo_sorter_domain::{SortState, UndoDirection};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").expect("file should be written");
    }

    #[test]
    fn lists_direct_children_sorted_by_name() {
        let dir = TempDir::new().expect("tempdir");
        touch(&dir.path().join("b.png"));
        touch(&dir.path().join("a.jpg"));
        fs::create_dir(dir.path().join("Y")).expect("mkdir");
        fs::create_dir(dir.path().join("X")).expect("mkdir");
        touch(&dir.path().join("X").join("nested.jpg"));

        let fs_port = LocalFileSystem;
        let files = fs_port.list_files(dir.path()).expect("files");
        assert_eq!(
            files,
            vec![dir.path().join("a.jpg"), dir.path().join("b.png")]
        );
        let dirs = fs_port.list_subdirectories(dir.path()).expect("dirs");
        assert_eq!(dirs, vec![dir.path().join("X"), dir.path().join("Y")]);
    }

    #[test]
    fn missing_folder_is_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let result = LocalFileSystem.list_files(&dir.path().join("gone"));
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn file_is_not_a_folder() {
        let dir = TempDir::new().expect("tempdir");
        let file = dir.path().join("a.jpg");
        touch(&file);
        let result = LocalFileSystem.list_subdirectories(&file);
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn rename_moves_file_and_reports_failures() {
        let dir = TempDir::new().expect("tempdir");
        let source = dir.path().join("a.jpg");
        touch(&source);
        fs::create_dir(dir.path().join("X")).expect("mkdir");
        let destination = dir.path().join("X").join("a.jpg");

        let fs_port = LocalFileSystem;
        fs_port.rename(&source, &destination).expect("rename");
        assert!(!fs_port.exists(&source));
        assert!(fs_port.exists(&destination));

        let result = fs_port.rename(&source, &destination);
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }

    fn sorting_fixture() -> (TempDir, SortEngine) {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("a.jpg"), b"new").expect("write");
        fs::write(dir.path().join("b.png"), b"second").expect("write");
        fs::create_dir(dir.path().join("X")).expect("mkdir");
        fs::write(dir.path().join("X").join("a.jpg"), b"old").expect("write");
        fs::write(dir.path().join("X").join("a(1).jpg"), b"older").expect("write");

        let catalog = load_catalog(&LocalFileSystem, dir.path()).expect("catalog");
        (dir, SortEngine::new(catalog))
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).expect("file should be readable")
    }

    #[test]
    fn move_never_overwrites_existing_photos() {
        let (dir, mut engine) = sorting_fixture();
        let target = dir.path().join("X");

        let outcome = engine
            .move_current(&LocalFileSystem, 0)
            .expect("move should succeed");
        assert_eq!(outcome.record.destination, target.join("a(2).jpg"));
        assert_eq!(read(&target.join("a(2).jpg")), "new");
        assert_eq!(read(&target.join("a.jpg")), "old");
        assert_eq!(read(&target.join("a(1).jpg")), "older");
        assert!(!dir.path().join("a.jpg").exists());
        assert_eq!(engine.cursor(), 1);
    }

    #[test]
    fn undo_and_redo_move_real_files() {
        let (dir, mut engine) = sorting_fixture();
        let sorted = dir.path().join("X").join("a(2).jpg");
        engine.move_current(&LocalFileSystem, 0).expect("move");

        let undo = engine
            .undo_redo(&LocalFileSystem)
            .expect("undo")
            .expect("outcome");
        assert_eq!(undo.direction, UndoDirection::Undo);
        assert_eq!(engine.cursor(), 0);
        assert_eq!(read(&dir.path().join("a.jpg")), "new");
        assert!(!sorted.exists());

        let redo = engine
            .undo_redo(&LocalFileSystem)
            .expect("redo")
            .expect("outcome");
        assert_eq!(redo.direction, UndoDirection::Redo);
        assert_eq!(engine.cursor(), 1);
        assert_eq!(read(&sorted), "new");
        assert!(!dir.path().join("a.jpg").exists());
    }

    #[test]
    fn redo_onto_occupied_path_leaves_both_files() {
        let (dir, mut engine) = sorting_fixture();
        let sorted = dir.path().join("X").join("a(2).jpg");
        engine.move_current(&LocalFileSystem, 0).expect("move");
        engine.undo_redo(&LocalFileSystem).expect("undo");
        fs::write(&sorted, b"squat").expect("write");

        let result = engine.undo_redo(&LocalFileSystem);
        assert!(matches!(result, Err(ApplicationError::MoveConflict(path)) if path == sorted));
        assert_eq!(read(&sorted), "squat");
        assert_eq!(read(&dir.path().join("a.jpg")), "new");
        assert_eq!(engine.cursor(), 0);

        fs::remove_file(&sorted).expect("remove");
        engine.move_current(&LocalFileSystem, 0).expect("first move");
        let last = engine.move_current(&LocalFileSystem, 0).expect("second move");
        assert_eq!(last.state, SortState::Complete { total: 2 });
        assert_eq!(read(&dir.path().join("X").join("b.png")), "second");
    }
}
