// ============================================================================
// domain/error.rs - BLOCK DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them per artifact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid block title '{title}': {reason}")]
    InvalidTitle { title: String, reason: String },

    #[error("invalid block namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTitle { reason, .. } => vec![
                format!("The block title {reason}"),
                "Use letters, digits and spaces, e.g. 'Hero Banner'".into(),
            ],
            Self::InvalidNamespace { .. } => vec![
                "The namespace prefixes the block name, e.g. 'acme/hero-banner'".into(),
                "Use a short lowercase word such as your theme or plugin name".into(),
            ],
        }
    }

    /// Every domain error is something the operator typed.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
