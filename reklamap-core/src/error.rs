//! Error types for ReklaMap Core

use thiserror::Error;

/// Ledger operation errors
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Rejected input. `mismatches` lists the individual fields that failed
    /// a cross-check, when the rejection came from one.
    #[error("{message}")]
    Validation {
        message: String,
        mismatches: Vec<String>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not authorized: {0}")]
    Authorization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LedgerError {
    /// Plain validation failure without field mismatches
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            mismatches: Vec::new(),
        }
    }

    /// Validation failure carrying the mismatched field labels
    pub fn mismatch(message: impl Into<String>, mismatches: Vec<String>) -> Self {
        Self::Validation {
            message: message.into(),
            mismatches,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for Ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_message() {
        let err = LedgerError::mismatch(
            "Mismatch found in the following field(s): Lot Assignment.",
            vec!["Lot Assignment".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "Mismatch found in the following field(s): Lot Assignment."
        );
    }

    #[test]
    fn test_not_found_helper() {
        assert!(LedgerError::NotFound("complaint 7".into()).is_not_found());
        assert!(!LedgerError::validation("bad").is_not_found());
    }
}
