//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `blockgen-adapters` crate provides implementations.

use std::path::Path;

use crate::application::CancellationToken;
use crate::domain::{BlockAnswers, ManifestPatch, RenderContext, TemplateKind};
use crate::error::BlockgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `blockgen_adapters::filesystem::LocalFilesystem` (production)
/// - `blockgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BlockgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> BlockgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Move a directory to a path that does not exist yet.
    fn rename(&self, from: &Path, to: &Path) -> BlockgenResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> BlockgenResult<()>;
}

/// Port for stub retrieval.
///
/// Implemented by:
/// - `blockgen_adapters::template_store::FilesystemTemplateStore` (stubs directory)
/// - `blockgen_adapters::template_store::BuiltinTemplateStore` (compiled-in stubs)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Read the raw text of a stub.
    ///
    /// Fails with `TemplateReadFailure` when the stub cannot be read.
    fn load(&self, kind: TemplateKind) -> BlockgenResult<String>;

    /// Where the stubs come from, for logs and summaries.
    fn describe(&self) -> String;
}

/// Port for text stub rendering.
pub trait TextRenderer: Send + Sync {
    /// Replace tokens and markers of `context` in `template`.
    fn render(&self, template: &str, context: &RenderContext) -> BlockgenResult<String>;
}

/// Port for structured manifest rendering.
pub trait DocumentPatcher: Send + Sync {
    /// Parse `template`, assign the fields of `patch`, and serialize.
    ///
    /// Fails with `TemplateParseError` when `template` is not a document
    /// the patch can be applied to.
    fn patch(&self, template: &str, patch: &ManifestPatch) -> BlockgenResult<String>;
}

/// Port for gathering answers from the operator.
pub trait AnswerCollector {
    /// Ask every question in order.
    ///
    /// Returns `CancelledByOperator` when a prompt is declined or `cancel`
    /// is set between prompts.
    fn collect(&self, cancel: &CancellationToken) -> BlockgenResult<BlockAnswers>;
}
