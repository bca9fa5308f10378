//! A [`Resource`] backed by an [`ApiClient`].

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::{Headers, RequestConfig, Resource};
use crate::response::{JsonFormat, ResponseFormat};

/// One REST resource (e.g. `/api/accounts`) served by a shared [`ApiClient`].
///
/// Responses are parsed with `F`; by default into a `serde_json::Value`.
///
/// ## Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use resource_client::{ApiClient, CallArgs, EndpointDescriptor, HttpResource};
///
/// let client = Arc::new(ApiClient::new(url::Url::parse("http://localhost:4000")?)?);
/// let accounts: HttpResource = HttpResource::new(client, "/api/accounts")
///     .with_header("Accept-Language", "en");
///
/// let get = EndpointDescriptor::builder().build()?.into_handler();
/// let page = get.call(&accounts, CallArgs::new()).await?;
/// ```
pub struct HttpResource<F = JsonFormat<serde_json::Value>> {
    client: Arc<ApiClient>,
    resource_path: String,
    headers: Headers,
    _format: PhantomData<F>,
}

impl<F: ResponseFormat> HttpResource<F> {
    /// Creates a resource rooted at `resource_path` with no headers.
    pub fn new(client: Arc<ApiClient>, resource_path: impl Into<String>) -> Self {
        Self {
            client,
            resource_path: resource_path.into(),
            headers: Headers::new(),
            _format: PhantomData,
        }
    }

    /// Adds a header sent with every request of this resource.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// Manual impls - F is only a marker and need not be Clone or Debug.
impl<F> Clone for HttpResource<F> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            resource_path: self.resource_path.clone(),
            headers: self.headers.clone(),
            _format: PhantomData,
        }
    }
}

impl<F> fmt::Debug for HttpResource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResource")
            .field("base_url", &self.client.base_url().as_str())
            .field("resource_path", &self.resource_path)
            .field("headers", &self.headers)
            .finish()
    }
}

impl<F: ResponseFormat> Resource for HttpResource<F> {
    type Response = F::Output;

    fn resource_path(&self) -> &str {
        &self.resource_path
    }

    fn headers(&self) -> &Headers {
        &self.headers
    }

    async fn request(&self, config: RequestConfig, retry: bool) -> Result<F::Output, ApiError> {
        self.client.send::<F>(&config, retry).await
    }
}
