//! Response parsing errors.

use thiserror::Error;

/// Errors while turning a response body into the caller's output type.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Body was not valid UTF-8 text.
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,
}

impl ResponseError {
    /// Returns `true` if this is a structured-format parse failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_) | Self::YamlParse(_))
    }
}
