//! Endpoint and URL configuration errors.

use thiserror::Error;

use crate::endpoint_id::EndpointIdError;

/// Errors in endpoint descriptors, path templates or client setup.
///
/// These usually indicate programmer errors in an endpoint definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Endpoint ID validation failed.
    #[error("Invalid endpoint ID: {0}")]
    InvalidEndpointId(#[from] EndpointIdError),

    /// A declared URL parameter has no `{name}` placeholder in the path.
    #[error("URL parameter '{param}' does not appear in path template {path}")]
    UnknownUrlParam {
        /// The declared parameter name.
        param: String,
        /// The path template it was checked against.
        path: String,
    },

    /// The same URL parameter was declared twice.
    #[error("Duplicate URL parameter: {param}")]
    DuplicateUrlParam {
        /// The repeated parameter name.
        param: String,
    },

    /// A placeholder was left in the URL after substitution.
    #[error("URL is not completely solved: {{{placeholder}}} has no value")]
    UnresolvedPlaceholder {
        /// Name of the unresolved placeholder.
        placeholder: String,
    },

    /// Header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The header name as supplied.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
