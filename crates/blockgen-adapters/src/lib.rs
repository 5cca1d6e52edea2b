//! Infrastructure adapters for blockgen.
//!
//! This crate implements the ports defined in `blockgen_core::application::ports`.
//! It contains all filesystem access and the concrete template formats.

pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{JsonManifestPatcher, MarkerRenderer};
pub use template_store::{BuiltinTemplateStore, FilesystemTemplateStore, required_store, store_for};
