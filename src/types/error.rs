//! Core error type

use thiserror::Error;

/// The only failure the selector has: a request or provider input that
/// cannot enter the algorithm. Once inputs are valid, selection is total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecisionError {
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl DecisionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DecisionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            DecisionError::InvalidInput { field, .. } => field,
        }
    }
}
