//! Mock transport for testing
//!
//! Routes are keyed by method and path. Each route can hold a queue of
//! one-shot responses followed by a sticky fallback.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::{ApiRequest, RawResponse, Transport};
use crate::error::{ApiError, ApiResult};

/// A captured request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// `Authorization` header as sent, if any
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Route {
    queued: VecDeque<ApiResult<RawResponse>>,
    fallback: Option<ApiResult<RawResponse>>,
}

/// Mock transport.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_envelope(Method::GET, "/api/v1/vendors", json!([]))
///     .await;
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(Method, String), Route>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

/// Successful envelope around `data`
pub fn ok_envelope(data: Value) -> RawResponse {
    RawResponse::json(
        200,
        &json!({ "success": true, "message": "OK", "data": data, "errors": [] }),
    )
}

/// Failed envelope with the given status
pub fn failed_envelope(status: u16, message: &str, errors: &[&str]) -> RawResponse {
    RawResponse::json(
        status,
        &json!({ "success": false, "message": message, "data": null, "errors": errors }),
    )
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer `method path` with `response` once the queue is empty.
    pub async fn with_response(self, method: Method, path: &str, response: RawResponse) -> Self {
        self.set_fallback(method, path, Ok(response)).await;
        self
    }

    /// Shorthand for a successful envelope around `data`.
    pub async fn with_envelope(self, method: Method, path: &str, data: Value) -> Self {
        self.with_response(method, path, ok_envelope(data)).await
    }

    /// Always fail `method path` without a response.
    pub async fn with_error(self, method: Method, path: &str, error: ApiError) -> Self {
        self.set_fallback(method, path, Err(error)).await;
        self
    }

    /// Delay every response (pairs well with paused tokio time).
    pub async fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().await = Some(delay);
        self
    }

    /// Replace the sticky response for a route.
    pub async fn set_fallback(&self, method: Method, path: &str, response: ApiResult<RawResponse>) {
        let mut routes = self.routes.lock().await;
        routes.entry((method, path.to_string())).or_default().fallback = Some(response);
    }

    /// Queue a one-shot response, served before the sticky one.
    pub async fn push_response(&self, method: Method, path: &str, response: RawResponse) {
        let mut routes = self.routes.lock().await;
        routes
            .entry((method, path.to_string()))
            .or_default()
            .queued
            .push_back(Ok(response));
    }

    /// All requests seen so far.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }

    /// Number of calls made to `method path`.
    pub async fn call_count(&self, method: Method, path: &str) -> usize {
        self.captured
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Total number of calls made.
    pub async fn total_calls(&self) -> usize {
        self.captured.lock().await.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        self.captured.lock().await.push(CapturedRequest {
            method: request.method.clone(),
            path: request.path.clone(),
            query: request.query.clone(),
            authorization: request.header("Authorization").map(str::to_string),
            body: request.body.clone(),
        });

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut routes = self.routes.lock().await;
        let route = routes.get_mut(&(request.method.clone(), request.path.clone()));
        match route {
            Some(route) => match route.queued.pop_front() {
                Some(response) => response,
                None => route.fallback.clone().unwrap_or_else(|| {
                    Ok(RawResponse::json(404, &json!({ "message": "no mock route" })))
                }),
            },
            None => Ok(RawResponse::json(
                404,
                &json!({ "success": false, "message": "no mock route", "errors": [] }),
            )),
        }
    }
}
