//! Error types for the VendorHub client

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for top-level VendorHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for anything that talks to the API
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// API failure the user has already been notified about
    #[error(transparent)]
    Notified(ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Whether the user has already been told about this error, either by a
    /// notification or by the session-expired prompt.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            Error::Notified(_) | Error::Api(ApiError::SessionExpired)
        )
    }
}

/// Failure body the API attaches to non-2xx responses.
///
/// Parsed leniently: either field may be missing, and bodies that are not
/// JSON at all simply produce no `FailureBody`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FailureBody {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub errors: Vec<String>,
}

impl FailureBody {
    /// Parse a raw response body, returning `None` when it carries nothing useful.
    pub fn parse(body: &str) -> Option<Self> {
        let parsed: FailureBody = serde_json::from_str(body).ok()?;
        if parsed.errors.is_empty() && parsed.message.as_deref().is_none_or(str::is_empty) {
            return None;
        }
        Some(parsed)
    }
}

/// Classified API failures.
///
/// Cloneable so a single coalesced fetch outcome can be delivered to every
/// reader attached to it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Business-rule rejection surfaced from the response envelope
    #[error("{0}")]
    Domain(String),

    /// Transport or server fault with the original status and body
    #[error("Request failed with status code {status}")]
    Server {
        status: u16,
        body: String,
        detail: Option<FailureBody>,
    },

    /// No response at all (timeout, refused connection, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Edge/WAF rejection page
    #[error("The requested URL was rejected. Your support ID is: {ticket}")]
    SecurityBlocked { ticket: String },

    /// 401 from the API; the session has been evicted
    #[error("Session expired. Please log in again.")]
    SessionExpired,

    /// 2xx response whose body is not a valid envelope
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The background fetch task died before producing an outcome
    #[error("Request cancelled: {0}")]
    Cancelled(String),
}

impl ApiError {
    /// Failure body attached to a server error, if any.
    pub fn failure_body(&self) -> Option<&FailureBody> {
        match self {
            ApiError::Server { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `vendorhub init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Not logged in. Run `vendorhub login` first.")]
    NotLoggedIn,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
