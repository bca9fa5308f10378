//! Top-level API error type.

use super::{ArgumentCountError, ClientError, ConfigError, ResponseError, ValidationError};
use thiserror::Error;

/// Top-level error type returned by every handler call.
///
/// Argument and validation failures are produced before any network
/// activity; transport and response failures come back from the
/// [`Resource`](crate::Resource) unchanged.
///
/// ## Examples
///
/// ```rust,ignore
/// use resource_client::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Arguments(e) => eprintln!("Bad call: {e}"),
///         ApiError::Validation(e) => eprintln!("Rejected payload: {e}"),
///         ApiError::Client(e) => eprintln!("Network error: {e}"),
///         ApiError::Response(e) => eprintln!("Invalid response: {e}"),
///         ApiError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Not enough path parameters were supplied for the endpoint.
    #[error(transparent)]
    Arguments(#[from] ArgumentCountError),

    /// The endpoint's validator rejected the assembled payload.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// HTTP client errors (network, timeout, status failures).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response body could not be parsed.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Descriptor or URL configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns `true` if the error was raised before reaching the transport.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Arguments(_) | Self::Validation(_) | Self::Config(_))
    }
}
