//! Error types for record validation

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Validation failures raised while constructing a record from raw input.
///
/// These are routine control flow for bad user input, not system faults:
/// every variant names the failing field so a caller can build an
/// actionable message (typically a 4xx-class response).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("type mismatch for field {field}: expected {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    #[error("constraint violation for field {field}: {rule}")]
    ConstraintViolation { field: String, rule: String },
}

impl SchemaError {
    /// The field this failure names. The document root is reported as `$`.
    pub fn field(&self) -> &str {
        match self {
            SchemaError::MissingField { field } => field,
            SchemaError::TypeMismatch { field, .. } => field,
            SchemaError::ConstraintViolation { field, .. } => field,
        }
    }
}
