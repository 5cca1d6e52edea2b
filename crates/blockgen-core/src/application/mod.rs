//! Application layer for blockgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BlockGenerator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Cancellation**: the interrupt flag shared with the CLI
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! block rules itself. Those live in `crate::domain`.

pub mod cancel;
pub mod error;
pub mod ports;
pub mod services;

pub use cancel::CancellationToken;

pub use services::{ArtifactOutcome, BlockGenerator, GenerationReport, RunState, WriteMode};

// Re-export port traits (for adapter implementation)
pub use ports::{AnswerCollector, DocumentPatcher, Filesystem, TemplateStore, TextRenderer};

pub use error::ApplicationError;
