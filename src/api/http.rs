//! Fetch Transport
//!
//! [`Transport`] over the browser `fetch` API via `gloo::net`.

use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};
use serde_json::Value;

use super::{ApiRequest, Method, Transport};
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        builder.header("Content-Type", "application/json")
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let builder = self.builder(request);
        let outgoing = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let message = error_detail(&text).unwrap_or_else(|| response.status_text());
            return Err(ApiError::Status { status: response.status(), message });
        }
        parse_body(&text)
    }
}

/// JSON body, or `null` for an empty one (204 and friends)
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(ApiError::decode)
}

/// `detail` field of an error body, as sent by the server on 4xx
fn error_detail(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}
