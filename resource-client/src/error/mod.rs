//! Layered error types for the resource client.
//!
//! Every failure a handler call can produce is an [`ApiError`]:
//! - [`ArgumentCountError`] - Too few path parameters for the endpoint
//! - [`ValidationError`] - The endpoint's payload validator rejected the payload
//! - [`ClientError`] - HTTP transport and network errors
//! - [`ResponseError`] - Response body parsing errors
//! - [`ConfigError`] - Descriptor, template and URL configuration errors

mod api_error;
mod argument_error;
mod client_error;
mod config_error;
mod response_error;
mod validation_error;

pub use api_error::ApiError;
pub use argument_error::ArgumentCountError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use response_error::ResponseError;
pub use validation_error::ValidationError;
