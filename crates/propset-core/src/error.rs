//! Unified error handling for Propset Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions for the CLI layer.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Propset Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// propset-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum PropsetError {
    /// Errors from the domain layer (file-format violations).
    #[error("Parse error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (validation and orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PropsetError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Propset".into(),
                "Please report this issue at: https://github.com/cosecruz/propset/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Parse => ErrorCategory::Parse,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Parse,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type PropsetResult<T> = Result<T, PropsetError>;
