//! Transport boundary
//!
//! The rest of the crate treats the network as an opaque async function from
//! [`ApiRequest`] to [`RawResponse`]. Everything HTTP-specific (TLS,
//! pooling, timeouts) lives behind [`Transport`].

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpTransport;
#[cfg(test)]
pub use mock::MockTransport;

/// Opaque asynchronous request function.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status; `Err` is reserved for calls that produced no response at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> ApiResult<RawResponse>;
}

/// An outbound API call, relative to the configured origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> ApiResult<Self> {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> ApiResult<Self> {
        Self::new(Method::PUT, path).with_body(body)
    }

    /// Attach a JSON body
    pub fn with_body<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to encode request: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Append a query parameter
    pub fn with_query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Set a header, replacing any previous value with the same name
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response as it came off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    /// JSON response with the given status
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, Some("application/json"), body.to_string())
    }

    /// HTML response with the given status
    pub fn html(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, Some("text/html; charset=utf-8"), body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html"))
    }
}
