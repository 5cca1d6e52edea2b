//! Stub stores.
//!
//! A stubs directory on disk takes precedence; the compiled-in copies are
//! used when it does not exist.

mod builtin;
mod fs;

use std::path::Path;

use blockgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::BlockgenResult,
};
use tracing::info;

pub use builtin::BuiltinTemplateStore;
pub use fs::FilesystemTemplateStore;

/// Pick the store for `stubs_dir`.
pub fn store_for(stubs_dir: &Path) -> Box<dyn TemplateStore> {
    if stubs_dir.is_dir() {
        Box::new(FilesystemTemplateStore::new(stubs_dir))
    } else {
        info!(
            stubs_dir = %stubs_dir.display(),
            "Stubs directory not found, using built-in stubs"
        );
        Box::new(BuiltinTemplateStore::new())
    }
}

/// Like [`store_for`], but a missing `stubs_dir` is an error rather than a
/// reason to fall back.
pub fn required_store(stubs_dir: &Path) -> BlockgenResult<Box<dyn TemplateStore>> {
    if !stubs_dir.is_dir() {
        return Err(ApplicationError::StoreNotFound {
            location: stubs_dir.display().to_string(),
        }
        .into());
    }
    Ok(Box::new(FilesystemTemplateStore::new(stubs_dir)))
}
