//! Application layer errors.
//!
//! These errors represent failures in request validation and orchestration,
//! not file-format violations. Format errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// From-scratch mode with an empty upsert set: nothing to write, and no
    /// base to start from.
    #[error("invalid request: from-scratch mode requires at least one upsert")]
    NothingToWrite,

    /// No output destination was supplied. Invalid regardless of mode.
    #[error("invalid request: no output file given")]
    MissingOutput,

    /// A source file was requested but could not be read. The mutation
    /// engine never runs when this is raised.
    #[error("source file {path} is unavailable: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// Filesystem operation failed (write side).
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NothingToWrite => vec![
                "Without an input file the store starts empty".into(),
                "Add at least one upsert, or supply an input file to edit".into(),
            ],
            Self::MissingOutput => vec![
                "An output file must always be given".into(),
                "Pass the destination path for the edited result".into(),
            ],
            Self::SourceUnavailable { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check that the file exists and is readable".into(),
                "Omit the input file to start from scratch".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NothingToWrite | Self::MissingOutput => ErrorCategory::Validation,
            Self::SourceUnavailable { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
