//! Endpoint descriptors and the handlers built from them.
//!
//! An [`EndpointDescriptor`] declares one REST operation: method, path
//! template, the URL parameters it expects, default payload data, an optional
//! validator and whether the transport may retry. [`create_handler`] turns a
//! descriptor into a [`Handler`] that binds call arguments, assembles the
//! payload, resolves the URL and dispatches through a [`Resource`].
//!
//! ## Examples
//!
//! ```rust,ignore
//! use resource_client::{create_handler, CallArgs, EndpointDescriptor, RestMethod};
//! use serde_json::json;
//!
//! let get_votes = create_handler(
//!     EndpointDescriptor::builder()
//!         .method(RestMethod::Get)
//!         .path("/votes/{address}")
//!         .url_param("address")
//!         .build()?,
//! );
//!
//! // GET <resource_path>/votes/123L?limit=10
//! let votes = get_votes
//!     .call(&accounts, CallArgs::new().param("123L").payload(json!({"limit": 10})))
//!     .await?;
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::endpoint_id::EndpointId;
use crate::error::{ApiError, ArgumentCountError, ConfigError, ValidationError};
use crate::method::RestMethod;
use crate::payload::{self, Payload};
use crate::query;
use crate::resource::{Headers, RequestConfig, Resource};
use crate::template;

/// Payload check run before every request of an endpoint.
pub type Validator = Arc<dyn Fn(&Payload) -> Result<(), ValidationError> + Send + Sync>;

/// Static description of one REST operation.
///
/// Immutable once built; share it freely between handlers and threads.
#[derive(Clone)]
pub struct EndpointDescriptor {
    id: Option<EndpointId>,
    method: RestMethod,
    path: String,
    url_params: Vec<String>,
    validator: Option<Validator>,
    default_data: Payload,
    retry: bool,
}

impl EndpointDescriptor {
    /// Creates a builder with GET, an empty path and no parameters.
    pub fn builder() -> EndpointDescriptorBuilder {
        EndpointDescriptorBuilder::default()
    }

    pub fn id(&self) -> Option<&EndpointId> {
        self.id.as_ref()
    }

    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Path template appended to the resource path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// URL parameter names, in the order call arguments bind to them.
    pub fn url_params(&self) -> &[String] {
        &self.url_params
    }

    pub fn default_data(&self) -> &Payload {
        &self.default_data
    }

    pub fn retry(&self) -> bool {
        self.retry
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Wraps this descriptor in a [`Handler`].
    pub fn into_handler(self) -> Handler {
        create_handler(self)
    }

    fn label(&self) -> &str {
        self.id.as_ref().map_or("anonymous", EndpointId::as_str)
    }
}

impl fmt::Debug for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointDescriptor")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("url_params", &self.url_params)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .field("default_data", &self.default_data)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Builder for [`EndpointDescriptor`].
#[derive(Default)]
pub struct EndpointDescriptorBuilder {
    id: Option<String>,
    method: RestMethod,
    path: String,
    url_params: Vec<String>,
    validator: Option<Validator>,
    default_data: Payload,
    retry: bool,
}

impl EndpointDescriptorBuilder {
    /// Sets the identifier used in traces.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn method(mut self, method: RestMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the path template, e.g. `/accounts/{address}`.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Declares the next URL parameter. Call arguments bind in declaration order.
    pub fn url_param(mut self, name: impl Into<String>) -> Self {
        self.url_params.push(name.into());
        self
    }

    /// Declares several URL parameters at once.
    pub fn url_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.url_params.extend(names.into_iter().map(Into::into));
        self
    }

    /// Installs a payload validator.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use resource_client::{EndpointDescriptor, RestMethod, ValidationError};
    ///
    /// let descriptor = EndpointDescriptor::builder()
    ///     .method(RestMethod::Post)
    ///     .path("/transactions")
    ///     .validator(|payload| match payload.get("amount") {
    ///         Some(_) => Ok(()),
    ///         None => Err(ValidationError::missing_field("amount")),
    ///     })
    ///     .build()
    ///     .unwrap();
    /// assert!(descriptor.has_validator());
    /// ```
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Payload) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Replaces the default payload data.
    pub fn default_data(mut self, data: Payload) -> Self {
        self.default_data = data;
        self
    }

    /// Adds one default payload entry.
    pub fn default_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_data.insert(key.into(), value.into());
        self
    }

    /// Marks requests of this endpoint as retryable by the transport.
    pub fn retry(mut self, retry: bool) -> Self {
        self.retry = retry;
        self
    }

    /// Builds the descriptor.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::InvalidEndpointId`] if the id is malformed
    /// - [`ConfigError::DuplicateUrlParam`] if a parameter is declared twice
    /// - [`ConfigError::UnknownUrlParam`] if a parameter has no placeholder in the path
    /// - [`ConfigError::UnresolvedPlaceholder`] if a path placeholder is not declared
    pub fn build(self) -> Result<EndpointDescriptor, ConfigError> {
        let id = self.id.map(EndpointId::new).transpose()?;
        let placeholders = template::placeholders(&self.path);

        for (i, param) in self.url_params.iter().enumerate() {
            if self.url_params[..i].contains(param) {
                return Err(ConfigError::DuplicateUrlParam {
                    param: param.clone(),
                });
            }
            if !placeholders.contains(&param.as_str()) {
                return Err(ConfigError::UnknownUrlParam {
                    param: param.clone(),
                    path: self.path.clone(),
                });
            }
        }
        if let Some(undeclared) = placeholders
            .iter()
            .find(|name| !self.url_params.iter().any(|param| param == *name))
        {
            return Err(ConfigError::UnresolvedPlaceholder {
                placeholder: undeclared.to_string(),
            });
        }

        Ok(EndpointDescriptor {
            id,
            method: self.method,
            path: self.path,
            url_params: self.url_params,
            validator: self.validator,
            default_data: self.default_data,
            retry: self.retry,
        })
    }
}

/// Arguments for one handler call.
///
/// `params` bind positionally to the descriptor's URL parameters; `payload`
/// is merged over the descriptor's default data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    params: Vec<String>,
    payload: Option<Value>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path parameter value. Numbers and strings both work.
    pub fn param(mut self, value: impl ToString) -> Self {
        self.params.push(value.to_string());
        self
    }

    /// Appends several path parameter values.
    pub fn params<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.params.extend(values.into_iter().map(|v| v.to_string()));
        self
    }

    /// Sets the caller payload.
    ///
    /// Only JSON objects contribute to the request; any other value is
    /// ignored with a warning.
    pub fn payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}

impl From<Payload> for CallArgs {
    fn from(payload: Payload) -> Self {
        Self::new().payload(Value::Object(payload))
    }
}

/// Callable produced by [`create_handler`] for one endpoint.
///
/// Cloning is cheap; every clone shares the same descriptor.
#[derive(Debug, Clone)]
pub struct Handler {
    descriptor: Arc<EndpointDescriptor>,
}

/// Builds the handler for `descriptor`.
pub fn create_handler(descriptor: EndpointDescriptor) -> Handler {
    Handler {
        descriptor: Arc::new(descriptor),
    }
}

impl Handler {
    pub fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }

    /// Performs the endpoint's request against `resource`.
    ///
    /// ## Errors
    ///
    /// - [`ApiError::Arguments`] if fewer params than URL parameters were given
    /// - [`ApiError::Validation`] with the validator's own error
    /// - [`ApiError::Config`] if the resolved URL still has a placeholder
    /// - anything the resource's `request` returns, unchanged
    #[instrument(
        name = "endpoint_call",
        skip_all,
        fields(
            endpoint.id = self.descriptor.label(),
            http.method = %self.descriptor.method,
            url.template = %self.descriptor.path,
            retry = self.descriptor.retry,
        )
    )]
    pub async fn call<R>(&self, resource: &R, args: CallArgs) -> Result<R::Response, ApiError>
    where
        R: Resource,
    {
        let config = self.prepare(resource.resource_path(), resource.headers(), args)?;
        debug!(url = %config.url, has_body = config.body.is_some(), "Dispatching request");
        resource.request(config, self.descriptor.retry).await
    }

    /// Resolves `args` into the request [`call`](Self::call) would send,
    /// without sending it.
    pub fn prepare(
        &self,
        resource_path: &str,
        headers: &Headers,
        args: CallArgs,
    ) -> Result<RequestConfig, ApiError> {
        let descriptor = &*self.descriptor;
        let CallArgs { params, payload: caller } = args;
        let declared = descriptor.url_params.len();

        if params.len() < declared {
            let missing = descriptor.url_params[params.len()..].to_vec();
            debug!(?missing, "Missing URL parameters");
            return Err(ArgumentCountError::new(missing).into());
        }
        if params.len() > declared {
            debug!(surplus = params.len() - declared, "Ignoring surplus path parameters");
        }

        let data = match caller {
            Some(Value::Object(overrides)) => payload::merge(&descriptor.default_data, &overrides),
            Some(other) => {
                // Only objects contribute to the request.
                warn!(payload = %other, "Ignoring non-object payload");
                descriptor.default_data.clone()
            }
            None => descriptor.default_data.clone(),
        };

        if let Some(validator) = &descriptor.validator {
            if let Err(err) = validator(&data) {
                debug!(error = %err, "Payload rejected by validator");
                return Err(err.into());
            }
        }

        let resolved: Vec<(&str, &str)> = descriptor
            .url_params
            .iter()
            .map(String::as_str)
            .zip(params.iter().map(String::as_str))
            .collect();
        let full_path = format!("{resource_path}{}", descriptor.path);
        let mut url = template::substitute(&full_path, resolved.as_slice())?;

        let mut body = None;
        if !data.is_empty() {
            if descriptor.method.uses_query_payload() {
                url.push('?');
                url.push_str(&query::encode(&data));
            } else {
                body = Some(data);
            }
        }

        Ok(RequestConfig {
            method: descriptor.method,
            url,
            headers: headers.clone(),
            body,
        })
    }
}
