//! Integration tests for endpoint handlers against an in-memory resource.
//!
//! These tests verify that:
//! - Argument and validation failures never reach the transport
//! - URL parameters, query strings and bodies are composed correctly
//! - The descriptor's retry flag and the transport's result pass through unchanged

use std::sync::Mutex;

use resource_client::{
    create_handler, ApiError, CallArgs, ClientError, EndpointDescriptor, Headers, RequestConfig,
    Resource, RestMethod, ValidationError,
};
use serde_json::{json, Value};

/// Records every request and answers with a fixed outcome.
struct RecordingResource {
    resource_path: String,
    headers: Headers,
    fail_with_status: Option<u16>,
    calls: Mutex<Vec<(RequestConfig, bool)>>,
}

impl RecordingResource {
    fn new(resource_path: &str) -> Self {
        let mut headers = Headers::new();
        headers.insert("accept".to_string(), "application/json".to_string());
        headers.insert("nethash".to_string(), "198f2b61".to_string());
        Self {
            resource_path: resource_path.to_string(),
            headers,
            fail_with_status: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(resource_path: &str, status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::new(resource_path)
        }
    }

    fn calls(&self) -> Vec<(RequestConfig, bool)> {
        self.calls.lock().unwrap().clone()
    }

    fn only_call(&self) -> (RequestConfig, bool) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one transport call");
        calls.into_iter().next().unwrap()
    }
}

impl Resource for RecordingResource {
    type Response = Value;

    fn resource_path(&self) -> &str {
        &self.resource_path
    }

    fn headers(&self) -> &Headers {
        &self.headers
    }

    async fn request(&self, config: RequestConfig, retry: bool) -> Result<Value, ApiError> {
        let url = config.url.clone();
        self.calls.lock().unwrap().push((config, retry));
        match self.fail_with_status {
            Some(status) => Err(ClientError::HttpStatus {
                status,
                message: "node unavailable".to_string(),
            }
            .into()),
            None => Ok(json!({ "url": url })),
        }
    }
}

fn object(value: Value) -> resource_client::Payload {
    value.as_object().cloned().unwrap()
}

// =============================================================================
// Short-circuit failures
// =============================================================================

#[tokio::test]
async fn missing_url_params_are_rejected_without_transport_call() {
    let resource = RecordingResource::new("/api/blocks");
    let handler = create_handler(
        EndpointDescriptor::builder()
            .path("/{height}/transactions/{id}")
            .url_params(["height", "id"])
            .build()
            .unwrap(),
    );

    let err = handler.call(&resource, CallArgs::new()).await.unwrap_err();
    match err {
        ApiError::Arguments(e) => {
            assert_eq!(e.missing, vec!["height".to_string(), "id".to_string()]);
            assert_eq!(
                e.to_string(),
                "This endpoint must be supplied with the following parameters: height,id"
            );
        }
        other => panic!("expected argument error, got {other:?}"),
    }

    let err = handler
        .call(&resource, CallArgs::new().param(10))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Arguments(e) if e.missing == vec!["id".to_string()]));
    assert!(resource.calls().is_empty());
}

#[tokio::test]
async fn validator_error_is_returned_unchanged() {
    let resource = RecordingResource::new("/api/transactions");
    let handler = create_handler(
        EndpointDescriptor::builder()
            .method(RestMethod::Post)
            .validator(|payload| match payload.get("amount") {
                Some(Value::Number(_)) => Ok(()),
                Some(_) => Err(ValidationError::invalid_field("amount", "must be a number")),
                None => Err(ValidationError::missing_field("amount")),
            })
            .build()
            .unwrap(),
    );

    let err = handler
        .call(&resource, CallArgs::new().payload(json!({"amount": "lots"})))
        .await
        .unwrap_err();
    match err {
        ApiError::Validation(e) => {
            assert_eq!(e, ValidationError::invalid_field("amount", "must be a number"))
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(resource.calls().is_empty());

    handler
        .call(&resource, CallArgs::new().payload(json!({"amount": 1})))
        .await
        .unwrap();
    assert_eq!(resource.calls().len(), 1);
}

#[tokio::test]
async fn transport_error_is_forwarded() {
    let resource = RecordingResource::failing("/api/node", 503);
    let handler = create_handler(EndpointDescriptor::builder().path("/status").build().unwrap());

    let err = handler.call(&resource, CallArgs::new()).await.unwrap_err();
    match err {
        ApiError::Client(ClientError::HttpStatus { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "node unavailable");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(resource.calls().len(), 1);
}

// =============================================================================
// Request composition
// =============================================================================

#[tokio::test]
async fn get_votes_scenario() {
    let resource = RecordingResource::new("/api/accounts");
    let handler = create_handler(
        EndpointDescriptor::builder()
            .method(RestMethod::Get)
            .path("/votes/{address}")
            .url_param("address")
            .build()
            .unwrap(),
    );

    let response = handler
        .call(&resource, CallArgs::new().param("123L").payload(json!({"limit": 10})))
        .await
        .unwrap();
    assert_eq!(response, json!({"url": "/api/accounts/votes/123L?limit=10"}));

    let (config, retry) = resource.only_call();
    assert_eq!(config.method, RestMethod::Get);
    assert_eq!(config.url, "/api/accounts/votes/123L?limit=10");
    assert_eq!(config.body, None);
    assert!(!retry);
}

#[tokio::test]
async fn post_transaction_scenario() {
    let resource = RecordingResource::new("/api/transactions");
    let handler = create_handler(
        EndpointDescriptor::builder()
            .method(RestMethod::Post)
            .default_value("type", 0)
            .build()
            .unwrap(),
    );

    handler
        .call(&resource, CallArgs::new().payload(json!({"amount": 100})))
        .await
        .unwrap();

    let (config, _) = resource.only_call();
    assert_eq!(config.method, RestMethod::Post);
    assert_eq!(config.url, "/api/transactions");
    assert_eq!(config.body, Some(object(json!({"type": 0, "amount": 100}))));
}

#[tokio::test]
async fn payload_merge_is_right_biased() {
    let resource = RecordingResource::new("/api/delegates");
    let handler = create_handler(
        EndpointDescriptor::builder()
            .method(RestMethod::Patch)
            .default_data(object(json!({"a": 1, "b": 2})))
            .build()
            .unwrap(),
    );

    handler
        .call(&resource, CallArgs::new().payload(json!({"b": 3, "c": 4})))
        .await
        .unwrap();

    let (config, _) = resource.only_call();
    assert_eq!(config.body, Some(object(json!({"a": 1, "b": 3, "c": 4}))));
}

#[tokio::test]
async fn payload_is_never_a_url_param() {
    let resource = RecordingResource::new("");
    let handler = create_handler(
        EndpointDescriptor::builder()
            .method(RestMethod::Put)
            .path("/accounts/{id}")
            .url_param("id")
            .build()
            .unwrap(),
    );

    handler
        .call(&resource, CallArgs::new().param("42").payload(json!({"id": "7"})))
        .await
        .unwrap();

    let (config, _) = resource.only_call();
    assert_eq!(config.url, "/accounts/42");
    assert_eq!(config.body, Some(object(json!({"id": "7"}))));
}

#[tokio::test]
async fn headers_are_copied_from_resource() {
    let resource = RecordingResource::new("/api/peers");
    let handler = create_handler(EndpointDescriptor::builder().build().unwrap());

    handler.call(&resource, CallArgs::new()).await.unwrap();

    let (config, _) = resource.only_call();
    assert_eq!(config.headers, resource.headers);
    assert_eq!(config.url, "/api/peers");
}

// =============================================================================
// Retry pass-through and independence
// =============================================================================

#[tokio::test]
async fn retry_flag_passes_through_on_every_call() {
    let resource = RecordingResource::new("/api/node");
    let retrying = create_handler(
        EndpointDescriptor::builder()
            .path("/status")
            .retry(true)
            .build()
            .unwrap(),
    );
    let plain = create_handler(EndpointDescriptor::builder().path("/constants").build().unwrap());

    for _ in 0..3 {
        retrying.call(&resource, CallArgs::new()).await.unwrap();
    }
    plain.call(&resource, CallArgs::new()).await.unwrap();

    let flags: Vec<_> = resource.calls().into_iter().map(|(_, retry)| retry).collect();
    assert_eq!(flags, vec![true, true, true, false]);
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let resource = RecordingResource::new("/api/accounts");
    let handler = create_handler(
        EndpointDescriptor::builder()
            .path("/{address}")
            .url_param("address")
            .default_value("limit", 1)
            .build()
            .unwrap(),
    );
    let other = handler.clone();

    let (first, second) = tokio::join!(
        handler.call(&resource, CallArgs::new().param("1L").payload(json!({"offset": 5}))),
        other.call(&resource, CallArgs::new().param("2L")),
    );

    assert_eq!(first.unwrap(), json!({"url": "/api/accounts/1L?limit=1&offset=5"}));
    assert_eq!(second.unwrap(), json!({"url": "/api/accounts/2L?limit=1"}));
    assert_eq!(handler.descriptor().default_data(), &object(json!({"limit": 1})));
}
