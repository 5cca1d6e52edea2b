//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use blockgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BlockgenError, BlockgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> BlockgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BlockgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> BlockgenResult<()> {
        if to.exists() {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Destination appeared while writing".into(),
            }
            .into());
        }
        std::fs::rename(from, to).map_err(|e| map_io_error(to, e, "rename directory"))
    }

    fn remove_dir_all(&self, path: &Path) -> BlockgenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BlockgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_refuses_to_replace_an_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let from = tmp.path().join(".hero.staging");
        let to = tmp.path().join("hero");
        fs.create_dir_all(&from).unwrap();
        fs.create_dir_all(&to).unwrap();

        assert!(fs.rename(&from, &to).is_err());
        assert!(from.exists());
    }

    #[test]
    fn write_into_missing_directory_reports_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("view.php");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        assert!(err.to_string().contains("view.php"));
    }
}
