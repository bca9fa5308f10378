//! Response format trait and implementations.

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ResponseError;

/// Strategy for parsing a response body into a typed value.
///
/// The format is chosen per resource, so every endpoint of that resource
/// resolves to the same output type.
pub trait ResponseFormat: Send + Sync {
    /// The output type after parsing.
    type Output: Send + Sync;

    /// Parse a response body into the output type.
    fn parse(body: bytes::Bytes)
        -> impl Future<Output = Result<Self::Output, ResponseError>> + Send;

    /// Value sent in the `Accept` header.
    fn content_type() -> &'static str;
}

/// JSON response format with typed deserialization.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ResponseError> {
        if body.is_empty() {
            return Err(ResponseError::EmptyBody);
        }
        serde_json::from_slice(&body).map_err(ResponseError::JsonParse)
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}

/// YAML response format with typed deserialization.
#[derive(Debug, Clone, Copy)]
pub struct YamlFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for YamlFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ResponseError> {
        serde_yaml::from_slice(&body).map_err(ResponseError::YamlParse)
    }

    fn content_type() -> &'static str {
        "application/yaml"
    }
}

/// Plain text response format.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormat;

impl ResponseFormat for PlainTextFormat {
    type Output = String;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ResponseError> {
        String::from_utf8(body.to_vec()).map_err(ResponseError::InvalidText)
    }

    fn content_type() -> &'static str {
        "text/plain"
    }
}

/// Binary response format. Returns the raw bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryFormat;

impl ResponseFormat for BinaryFormat {
    type Output = Vec<u8>;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ResponseError> {
        Ok(body.to_vec())
    }

    fn content_type() -> &'static str {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Account {
        address: String,
        balance: String,
    }

    #[tokio::test]
    async fn test_json_format_parse() {
        let body = bytes::Bytes::from(r#"{"address": "123L", "balance": "1000"}"#);
        let account = JsonFormat::<Account>::parse(body).await.unwrap();
        assert_eq!(account.address, "123L");
    }

    #[tokio::test]
    async fn test_json_format_empty_body() {
        let result = JsonFormat::<Account>::parse(bytes::Bytes::new()).await;
        assert!(matches!(result, Err(ResponseError::EmptyBody)));
    }

    #[tokio::test]
    async fn test_json_format_invalid() {
        let result = JsonFormat::<Account>::parse(bytes::Bytes::from("not json")).await;
        assert!(matches!(result, Err(ResponseError::JsonParse(_))));
    }

    #[tokio::test]
    async fn test_yaml_format_parse() {
        let body = bytes::Bytes::from("address: 123L\nbalance: '0'");
        let account = YamlFormat::<Account>::parse(body).await.unwrap();
        assert_eq!(account.balance, "0");
    }

    #[tokio::test]
    async fn test_plain_text_rejects_invalid_utf8() {
        let result = PlainTextFormat::parse(bytes::Bytes::from(vec![0xFF, 0xFE])).await;
        assert!(matches!(result, Err(ResponseError::InvalidText(_))));
    }

    #[tokio::test]
    async fn test_binary_format() {
        let data = vec![0x00, 0x01, 0xFF];
        let result = BinaryFormat::parse(bytes::Bytes::from(data.clone())).await.unwrap();
        assert_eq!(result, data);
    }
}
