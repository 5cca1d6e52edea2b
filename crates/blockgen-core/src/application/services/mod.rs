//! Application services - orchestrate use cases.

pub mod generate_service;

pub use generate_service::{
    ArtifactOutcome, BlockGenerator, GenerationReport, RunState, WriteMode,
};
