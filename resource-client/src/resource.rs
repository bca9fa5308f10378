//! The resource capability endpoint handlers dispatch through.

use std::collections::BTreeMap;
use std::future::Future;

use crate::error::ApiError;
use crate::method::RestMethod;
use crate::payload::Payload;

/// Header names to values, copied verbatim into every request.
pub type Headers = BTreeMap<String, String>;

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    /// HTTP method.
    pub method: RestMethod,
    /// Resource path plus substituted endpoint path, with the query string
    /// already appended for GET payloads.
    pub url: String,
    /// Headers taken from the resource.
    pub headers: Headers,
    /// JSON body for non-GET requests with a non-empty payload.
    pub body: Option<Payload>,
}

/// A REST resource: a base path, its headers, and a way to execute requests.
///
/// Endpoint handlers read `resource_path` and `headers` and hand the composed
/// [`RequestConfig`] to `request`. They never mutate the resource.
///
/// ## Examples
///
/// ```rust,ignore
/// use resource_client::{ApiError, Headers, RequestConfig, Resource};
///
/// struct Accounts { headers: Headers }
///
/// impl Resource for Accounts {
///     type Response = serde_json::Value;
///
///     fn resource_path(&self) -> &str { "/api/accounts" }
///     fn headers(&self) -> &Headers { &self.headers }
///
///     async fn request(&self, config: RequestConfig, retry: bool) -> Result<Self::Response, ApiError> {
///         todo!("send `config` somewhere")
///     }
/// }
/// ```
pub trait Resource: Send + Sync {
    /// What a successful request resolves to.
    type Response: Send;

    /// Base path every endpoint path is appended to.
    fn resource_path(&self) -> &str;

    /// Headers sent with every request of this resource.
    fn headers(&self) -> &Headers;

    /// Executes a request. `retry` comes straight from the endpoint
    /// descriptor; what it means is up to the implementation.
    fn request(
        &self,
        config: RequestConfig,
        retry: bool,
    ) -> impl Future<Output = Result<Self::Response, ApiError>> + Send;
}
