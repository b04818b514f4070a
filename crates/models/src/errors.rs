//! Error types for the models crate.

use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// A field value rejected by client-side validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid value for `{field}`, length must be less than or equal to `{max}`")]
    MaxLength { field: &'static str, max: usize },

    #[error("Invalid value for `{field}`, length must be greater than or equal to `{min}`")]
    MinLength { field: &'static str, min: usize },

    #[error("Invalid value for `{field}`, must follow pattern `/{pattern}/`")]
    Pattern {
        field: &'static str,
        pattern: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MaxLength { field, .. }
            | Self::MinLength { field, .. }
            | Self::Pattern { field, .. } => field,
        }
    }
}

/// Errors raised while building or converting models.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid type for `{field}`: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
