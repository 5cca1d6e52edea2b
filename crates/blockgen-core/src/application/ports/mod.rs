//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `blockgen-adapters` and the
//! CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Stub retrieval
//!   - `TextRenderer`: Token and marker substitution
//!   - `DocumentPatcher`: Manifest patching
//!   - `AnswerCollector`: Interactive questions (implemented by the CLI)

pub mod output;

pub use output::{AnswerCollector, DocumentPatcher, Filesystem, TemplateStore, TextRenderer};

#[cfg(test)]
pub use output::MockTemplateStore;
