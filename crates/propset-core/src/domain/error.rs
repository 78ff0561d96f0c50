use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A source line could not be split into key and value: after stripping
    /// a leading `#`, the line contains no `=` delimiter. Parsing is
    /// all-or-nothing; no partial store is produced.
    #[error("line {line}: no '=' separator in '{text}'")]
    MalformedLine { line: usize, text: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedLine { line, text } => vec![
                format!("Line {} is not in key=value form: '{}'", line, text),
                "Every line must be 'key=value' or '#key=value'".into(),
                "Blank lines and free-form comments are not supported".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedLine { .. } => ErrorCategory::Parse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Parse,
    NotFound,
    Internal,
}
