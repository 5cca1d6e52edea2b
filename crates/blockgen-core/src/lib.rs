//! blockgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the blockgen
//! ACF block generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           blockgen-cli (CLI)            │
//! │   (Prompts, config, AnswerCollector)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (BlockGenerator)             │
//! │         Orchestrates one run            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Store, Filesystem, Renderer, Patcher) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    blockgen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MarkerRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FieldSet, BlockIdentifiers, compose)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blockgen_core::prelude::*;
//!
//! let answers = BlockAnswers::new("Acme", "Hero Banner")
//!     .with_fields([FieldFlag::Title, FieldFlag::Text]);
//!
//! // with injected adapters
//! let generator = BlockGenerator::new(store, renderer, patcher, filesystem, "blocks");
//! let report = generator.generate(&answers, &CancellationToken::new())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AnswerCollector, ArtifactOutcome, BlockGenerator, CancellationToken, DocumentPatcher,
        Filesystem, GenerationReport, RunState, TemplateStore, TextRenderer, WriteMode,
    };
    pub use crate::domain::{
        ArtifactKind, BlockAnswers, BlockIdentifiers, FieldFlag, FieldSet, ManifestPatch,
        RenderContext, TemplateKind,
    };
    pub use crate::error::{BlockgenError, BlockgenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
