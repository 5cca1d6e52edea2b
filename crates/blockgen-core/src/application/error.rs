//! Application layer errors.
//!
//! These errors represent failures in orchestration, not block rules.
//! Rule violations are `DomainError` from `crate::domain`.
//!
//! Only [`DestinationExists`](ApplicationError::DestinationExists),
//! [`DirectoryCreateFailure`](ApplicationError::DirectoryCreateFailure) and
//! the domain pre-flight checks abort a run. Every other variant is scoped to
//! the artifact it occurred on and ends up in the run report.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The operator interrupted or declined a prompt.
    #[error("Operation cancelled")]
    CancelledByOperator,

    /// The block directory is already there. Nothing was written.
    #[error("A block directory already exists at {path}")]
    DestinationExists { path: PathBuf },

    /// The block directory could not be created.
    #[error("Failed to create block directory {path}: {reason}")]
    DirectoryCreateFailure { path: PathBuf, reason: String },

    /// A stub could not be read.
    #[error("Failed to read template '{template}': {reason}")]
    TemplateReadFailure { template: String, reason: String },

    /// A stub was read but is not usable (e.g. invalid JSON).
    #[error("Failed to parse template '{template}': {reason}")]
    TemplateParseError { template: String, reason: String },

    /// An artifact could not be written.
    #[error("Failed to write {path}: {reason}")]
    ArtifactWriteFailure { path: PathBuf, reason: String },

    /// Generic filesystem failure reported by an adapter.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Staged output could not be moved onto the destination.
    #[error("Failed to commit staged block to {path}: {reason}")]
    CommitFailed { path: PathBuf, reason: String },

    /// A stubs directory was asked for explicitly and is not there.
    #[error("Stubs directory not found: {location}")]
    StoreNotFound { location: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CancelledByOperator => vec!["No files were created".into()],
            Self::DestinationExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different block title".into(),
                format!("Remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::DirectoryCreateFailure { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that the blocks directory setting points somewhere writable".into(),
            ],
            Self::TemplateReadFailure { template, .. } => vec![
                format!("Check that '{template}' exists in the stubs directory"),
                "Remove the stubs directory to fall back to the built-in stubs".into(),
            ],
            Self::TemplateParseError { template, .. } => vec![
                format!("'{template}' must be a valid JSON object"),
                "Validate it with a JSON linter".into(),
            ],
            Self::ArtifactWriteFailure { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::CommitFailed { .. } => vec![
                "The staged files were removed; the destination is untouched".into(),
                "Retry without --staged to keep partial output".into(),
            ],
            Self::StoreNotFound { location } => vec![
                format!("No directory at {location}"),
                "Check the --stubs-dir path".into(),
                "Leave --stubs-dir out to use paths.stubs_dir or the built-in stubs".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CancelledByOperator => ErrorCategory::Cancelled,
            Self::DestinationExists { .. } => ErrorCategory::Validation,
            Self::StoreNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateReadFailure { .. } | Self::TemplateParseError { .. } => {
                ErrorCategory::Template
            }
            Self::DirectoryCreateFailure { .. }
            | Self::ArtifactWriteFailure { .. }
            | Self::FilesystemError { .. }
            | Self::CommitFailed { .. } => ErrorCategory::Internal,
        }
    }
}
