//! Request execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct that sends resolved
//! [`RequestConfig`]s to a node and parses the responses.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use tracing::{instrument, warn, Span};
use url::Url;

use crate::error::{ApiError, ClientError, ConfigError};
use crate::resource::RequestConfig;
use crate::response::ResponseFormat;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Extra attempts made for a retryable request by default.
const DEFAULT_MAX_RETRIES: u32 = 1;

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    max_retries: u32,
}

impl ApiClientBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request, on top of resource headers.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = ApiClient::builder(base_url)
    ///     .default_header("Accept-Language", "en")?
    ///     .build()?;
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let (name, value) = parse_header(name.as_ref(), value.as_ref())?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets how many extra attempts a retryable request gets.
    ///
    /// Only requests whose endpoint asked for retries are re-sent, and only
    /// after a retryable failure (see [`ClientError::is_retryable`]).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            max_retries: self.max_retries,
        })
    }
}

/// Async HTTP client that executes resolved requests against one node.
///
/// Request URLs are appended to the base URL, so a base of
/// `http://localhost:4000` and a request for `/api/accounts?limit=1` hit
/// `http://localhost:4000/api/accounts?limit=1`.
///
/// ## Examples
///
/// ```rust,ignore
/// use resource_client::{ApiClient, RequestConfig, RestMethod, Headers};
/// use resource_client::response::JsonFormat;
/// use url::Url;
///
/// let client = ApiClient::new(Url::parse("http://localhost:4000")?)?;
/// let config = RequestConfig {
///     method: RestMethod::Get,
///     url: "/api/node/status".to_string(),
///     headers: Headers::new(),
///     body: None,
/// };
/// let status: serde_json::Value = client.send::<JsonFormat<_>>(&config, false).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    max_retries: u32,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a new API client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Sends `config` and parses the response with `F`.
    ///
    /// With `retry` set, retryable client failures are re-sent immediately
    /// up to [`max_retries`](Self::max_retries) more times. All other
    /// failures are returned on first occurrence.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The URL or a header is invalid
    /// - The request fails (network, timeout, etc.)
    /// - The server returns a non-success status code
    /// - The response cannot be parsed
    pub async fn send<F>(&self, config: &RequestConfig, retry: bool) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        let attempts = if retry {
            self.max_retries.saturating_add(1)
        } else {
            1
        };
        let mut attempt = 1;

        loop {
            match self.send_once::<F>(config).await {
                Err(ApiError::Client(err)) if attempt < attempts && err.is_retryable() => {
                    warn!(attempt, max_attempts = attempts, error = %err, "Retrying request");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    #[instrument(
        name = "api_request",
        skip(self, config),
        fields(
            http.method = %config.method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn send_once<F>(&self, config: &RequestConfig) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        let full_url = self.resolve_url(&config.url)?;
        Span::current().record("http.url", full_url.as_str());

        let mut request = self
            .client
            .request(config.method.to_reqwest(), full_url)
            .header(ACCEPT, F::content_type());

        for (name, value) in &config.headers {
            let (name, value) = parse_header(name, value)?;
            request = request.header(name, value);
        }

        if let Some(body) = &config.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            return Err(ClientError::HttpStatus {
                status: status_code,
                message,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let parsed = F::parse(body).await?;

        Ok(parsed)
    }

    /// Appends a request path to the base URL, keeping any base path prefix.
    fn resolve_url(&self, url: &str) -> Result<Url, ConfigError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{url}"))?)
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ConfigError> {
    let header_name =
        HeaderName::try_from(name).map_err(|e| ConfigError::invalid_header(name, e))?;
    let header_value =
        HeaderValue::try_from(value).map_err(|e| ConfigError::invalid_header(name, e))?;
    Ok((header_name, header_value))
}
