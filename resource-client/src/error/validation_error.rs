//! Payload validation errors.

use thiserror::Error;

/// Outcome of a failed endpoint validator.
///
/// Validators return `Result<(), ValidationError>`; the handler surfaces the
/// error unchanged as [`ApiError::Validation`](super::ApiError::Validation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field the endpoint requires is absent from the payload.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A field is present but its value is not acceptable.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Any other rejection, described by the validator.
    #[error("{0}")]
    Custom(String),
}

impl ValidationError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => Some(field),
            Self::Custom(_) => None,
        }
    }
}
