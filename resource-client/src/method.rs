//! HTTP method types for REST endpoints.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods an endpoint descriptor can declare.
///
/// `Get` is the default and the only method whose payload travels in the
/// query string; every other method carries its payload as a JSON body.
///
/// ## Examples
///
/// ```rust
/// use resource_client::RestMethod;
///
/// let method = RestMethod::default();
/// assert_eq!(method, RestMethod::Get);
/// assert!(method.uses_query_payload());
///
/// let parsed: RestMethod = "POST".parse().unwrap();
/// assert!(!parsed.uses_query_payload());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    #[default]
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
    /// HTTP HEAD - Retrieve headers only.
    Head,
    /// HTTP OPTIONS - Query supported methods.
    Options,
}

impl RestMethod {
    /// Returns `true` if an assembled payload is serialized into the query
    /// string rather than attached as the request body.
    pub fn uses_query_payload(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
