//! HTTP transport.
//!
//! [`ApiClient`] executes resolved requests against a node with tracing
//! instrumentation and optional retries; [`HttpResource`] exposes it as a
//! [`Resource`](crate::Resource) endpoint handlers can dispatch through.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use resource_client::{ApiClient, HttpResource};
//! use url::Url;
//!
//! let client = ApiClient::builder(Url::parse("http://localhost:4000")?)
//!     .timeout(Duration::from_secs(10))
//!     .max_retries(2)
//!     .build()?;
//!
//! let blocks: HttpResource = HttpResource::new(Arc::new(client), "/api/blocks");
//! ```

mod executor;
mod http_resource;

pub use executor::{ApiClient, ApiClientBuilder};
pub use http_resource::HttpResource;
