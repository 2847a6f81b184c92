//! reqwest-backed transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;

use super::{ApiRequest, RawResponse, Transport};
use crate::error::{ApiError, ApiResult};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport bound to one API origin
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a transport with an explicit timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("vendorhub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        log::debug!("{} {}", request.method, url);

        let mut builder = self.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(ApiError::from)?;

        log::debug!("{} {} -> {}", request.method, url, status);

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
