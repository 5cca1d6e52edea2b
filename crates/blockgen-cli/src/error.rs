//! Error handling for the blockgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use blockgen_core::error::BlockgenError;

pub use blockgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Prompts need a terminal on stdin.
    #[error("blockgen needs an interactive terminal")]
    NotInteractive,

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `blockgen-core`.
    #[error("{0}")]
    Core(#[from] BlockgenError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The run finished but some artifacts were not written.
    #[error("{failed} of the block's files could not be written to {}", destination.display())]
    GenerationFailed {
        failed: usize,
        destination: PathBuf,
        rolled_back: bool,
    },

    /// The Ctrl-C handler could not be installed.
    #[error("Failed to install interrupt handler")]
    SignalHandler(#[source] ctrlc::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotInteractive => vec![
                "Run blockgen from a terminal, not a pipe or CI job".into(),
                "stdin must be attached to a TTY".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Show the active file with 'blockgen config path'".into(),
                "Write a fresh one with 'blockgen init --force'".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],

            Self::GenerationFailed {
                destination,
                rolled_back,
                ..
            } => {
                if *rolled_back {
                    vec![
                        "Nothing was written; the staging directory was removed".into(),
                        "Fix the cause above and run blockgen again".into(),
                    ]
                } else {
                    vec![
                        format!(
                            "The files that did succeed are in {}",
                            destination.display()
                        ),
                        "Remove that directory before running blockgen again".into(),
                        "Use 'blockgen new --staged' for all-or-nothing writes".into(),
                    ]
                }
            }

            Self::SignalHandler(_) => vec!["Another Ctrl-C handler may already be set".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotInteractive => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Template => ErrorCategory::Configuration,
                CoreCategory::Cancelled => ErrorCategory::Cancelled,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::GenerationFailed { .. } => ErrorCategory::Internal,
            Self::SignalHandler(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Cancelled     |  0   |
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Cancelled => 0,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Cancelled => tracing::info!("Cancelled: {}", self),
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The operator backed out. Not a failure.
    Cancelled,
    /// User input error (validation, existing destination, no TTY).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration or stub error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockgen_core::{application::ApplicationError, domain::DomainError};
    use std::io;

    fn core(err: impl Into<BlockgenError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn destination_exists_is_a_user_error() {
        let err = core(ApplicationError::DestinationExists {
            path: PathBuf::from("blocks/hero"),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_title_is_a_user_error() {
        let err = core(DomainError::InvalidTitle {
            title: String::new(),
            reason: "is empty".into(),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn cancellation_exits_zero() {
        assert_eq!(core(ApplicationError::CancelledByOperator).exit_code(), 0);
    }

    #[test]
    fn missing_store_is_not_found() {
        let err = core(ApplicationError::StoreNotFound {
            location: "stubs".into(),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn directory_create_failure_is_internal() {
        let err = core(ApplicationError::DirectoryCreateFailure {
            path: PathBuf::from("blocks/x"),
            reason: "denied".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn partial_failure_points_at_staged_mode() {
        let err = CliError::GenerationFailed {
            failed: 2,
            destination: PathBuf::from("blocks/hero"),
            rolled_back: false,
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("blocks/hero"));
        assert!(err.suggestions().iter().any(|s| s.contains("--staged")));
    }

    #[test]
    fn rollback_says_nothing_was_written() {
        let err = CliError::GenerationFailed {
            failed: 1,
            destination: PathBuf::from("blocks/hero"),
            rolled_back: true,
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("Nothing was written"))
        );
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = CliError::NotInteractive.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: denied"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_anyhow_error_is_configuration() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("bad toml"));
        let cli = result.with_cli_context(|| "loading config").unwrap_err();
        assert_eq!(cli.exit_code(), 4);
    }
}
