//! Custom error types for Go Budgeting
//!
//! Every failure in the wizard is recoverable: the worst outcome for the user
//! is being held on the current step. The variants mirror that taxonomy
//! (rejected input, invalid range, failed lookup, failed export) plus the
//! plumbing errors of the storage and terminal layers.

use thiserror::Error;

use crate::models::RangeWarning;

/// The main error type for Go Budgeting operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// A keystroke or value was refused by an input policy
    #[error("Input rejected: {0}")]
    InputRejected(String),

    /// Date range is inconsistent with the chosen interval
    #[error("{0}")]
    RangeInvalid(RangeWarning),

    /// Returning-user lookup found no profile
    #[error("No profile found for {email}. Create a profile to get started.")]
    LookupFailed { email: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Report export errors
    #[error("Export failed: {0}. Please try again.")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgetError {
    /// Create a "lookup failed" error for a returning-user email
    pub fn lookup_failed(email: impl Into<String>) -> Self {
        Self::LookupFailed {
            email: email.into(),
        }
    }

    /// Create a "not found" error for the saved plan draft
    pub fn draft_not_found(path: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Plan draft",
            identifier: path.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a returning-user lookup failure
    pub fn is_lookup_failed(&self) -> bool {
        matches!(self, Self::LookupFailed { .. })
    }

    /// Check if this error came from the input policy
    pub fn is_input_rejected(&self) -> bool {
        matches!(self, Self::InputRejected(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<RangeWarning> for BudgetError {
    fn from(warning: RangeWarning) -> Self {
        Self::RangeInvalid(warning)
    }
}

/// Result type alias for Go Budgeting operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntervalKind;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_lookup_failed() {
        let err = BudgetError::lookup_failed("sam@example.com");
        assert!(err.is_lookup_failed());
        assert!(err.to_string().contains("sam@example.com"));
    }

    #[test]
    fn test_range_invalid_shows_warning_text() {
        let err: BudgetError = RangeWarning::SpanOutOfBounds(IntervalKind::Weekly).into();
        assert_eq!(err.to_string(), "Weekly must be ≤ 7 days.");
    }

    #[test]
    fn test_export_error_is_retryable_message() {
        let err = BudgetError::Export("disk full".into());
        assert_eq!(err.to_string(), "Export failed: disk full. Please try again.");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
