//! Error types for debt loading, validation and plan setup

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayoffError {
    #[error("Invalid debt '{debt_id}': {field} {reason}")]
    Validation {
        debt_id: String,
        field: String,
        reason: String,
    },

    #[error("Duplicate debt id '{0}'")]
    DuplicateDebtId(String),

    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Unsupported debt file format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PayoffError {
    pub(crate) fn validation(debt_id: &str, field: &str, reason: impl Into<String>) -> Self {
        PayoffError::Validation {
            debt_id: debt_id.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
