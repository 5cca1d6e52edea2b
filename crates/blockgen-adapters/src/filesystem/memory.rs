//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use blockgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BlockgenError, BlockgenResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while the generator
/// owns another. Failures can be injected per file name or for directory
/// creation.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing_files: HashSet<String>,
    fail_create_dir: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to a file called `file_name` fail.
    pub fn fail_writes_to(self, file_name: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_files.insert(file_name.into());
        }
        self
    }

    /// Make every directory creation fail.
    pub fn fail_directory_creation(self) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_create_dir = true;
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directory paths, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> BlockgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| poisoned(path))?;

        if inner.fail_create_dir {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied (injected)".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> BlockgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| poisoned(path))?;

        let injected = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| inner.failing_files.contains(n));
        if injected {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No space left on device (injected)".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn rename(&self, from: &Path, to: &Path) -> BlockgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| poisoned(from))?;

        if inner.directories.contains(to) || inner.files.contains_key(to) {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Destination already exists".into(),
            }
            .into());
        }
        if !inner.directories.contains(from) {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        let files: Vec<_> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for old in files {
            if let (Some(content), Ok(rest)) = (inner.files.remove(&old), old.strip_prefix(from)) {
                inner.files.insert(to.join(rest), content);
            }
        }

        let dirs: Vec<_> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for old in dirs {
            inner.directories.remove(&old);
            if let Ok(rest) = old.strip_prefix(from) {
                inner.directories.insert(to.join(rest));
            }
        }

        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> BlockgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| poisoned(path))?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

fn poisoned(path: &Path) -> BlockgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "in-memory state poisoned by a panicking writer".into(),
    }
    .into()
}
