//! Declarative REST endpoints bound to API resources.
//!
//! The `resource-client` crate turns endpoint descriptors into callable
//! handlers. A handler binds path parameters, merges the caller payload over
//! the endpoint defaults, validates it, resolves the URL and places the
//! payload in the query string (GET) or the JSON body (everything else)
//! before handing the request to a [`Resource`].
//!
//! ## Features
//!
//! - **Endpoint descriptors**: method, path template, URL parameters,
//!   default data, validator and retry flag in one immutable value
//! - **Explicit call arguments**: path parameters and payload are passed
//!   separately through [`CallArgs`]
//! - **Pluggable transport**: anything implementing [`Resource`]; a reqwest
//!   backed [`HttpResource`] is included
//! - **Layered error handling**: every failure is an [`ApiError`] returned
//!   through the handler's future
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use resource_client::{ApiClient, CallArgs, EndpointDescriptor, HttpResource, RestMethod};
//! use serde_json::json;
//! use url::Url;
//!
//! let client = Arc::new(ApiClient::new(Url::parse("http://localhost:4000")?)?);
//! let transactions: HttpResource = HttpResource::new(client, "/api/transactions");
//!
//! let broadcast = EndpointDescriptor::builder()
//!     .id("transactions.broadcast")
//!     .method(RestMethod::Post)
//!     .default_value("type", 0)
//!     .build()?
//!     .into_handler();
//!
//! // POST /api/transactions with body {"type": 0, "amount": 100}
//! let receipt = broadcast
//!     .call(&transactions, CallArgs::new().payload(json!({"amount": 100})))
//!     .await?;
//! ```

pub mod client;
pub mod endpoint;
pub mod endpoint_id;
pub mod error;
pub mod method;
pub mod payload;
pub mod query;
pub mod resource;
pub mod response;
pub mod template;

// Re-exports for convenience
pub use client::{ApiClient, ApiClientBuilder, HttpResource};
pub use endpoint::{
    create_handler, CallArgs, EndpointDescriptor, EndpointDescriptorBuilder, Handler, Validator,
};
pub use endpoint_id::{EndpointId, EndpointIdError};
pub use error::{
    ApiError, ArgumentCountError, ClientError, ConfigError, ResponseError, ValidationError,
};
pub use method::RestMethod;
pub use payload::Payload;
pub use resource::{Headers, RequestConfig, Resource};
pub use response::ResponseFormat;
