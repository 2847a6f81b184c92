//! Response envelope and its validator
//!
//! Every endpoint wraps its payload in the same envelope. [`Expect`] is the
//! single place that turns an envelope into either typed data or a
//! [`ApiError::Domain`] failure, so call sites never branch on the envelope
//! shape themselves.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Uniform wire envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub data: Option<T>,

    #[serde(default)]
    pub errors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Envelope<Value> {
    /// Parse a raw 2xx body
    pub fn parse(body: &str) -> ApiResult<Self> {
        serde_json::from_str(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse envelope: {}", e)))
    }
}

/// What the caller needs from `data` when `success` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Collection endpoint: absent data means an empty list
    List,
    /// Fetch-by-id: absent data means the resource does not exist
    Found,
    /// Mutation returning the created/changed resource
    Returned,
    /// Command with no meaningful payload
    Nothing,
}

/// Validation rules for one call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expect {
    resource: String,
    requirement: Requirement,
    default_message: Option<String>,
}

impl Expect {
    fn new(resource: &str, requirement: Requirement) -> Self {
        Self {
            resource: resource.to_string(),
            requirement,
            default_message: None,
        }
    }

    /// List endpoint for `resource`
    pub fn list(resource: &str) -> Self {
        Self::new(resource, Requirement::List)
    }

    /// Fetch-by-id for `resource`
    pub fn found(resource: &str) -> Self {
        Self::new(resource, Requirement::Found)
    }

    /// Mutation that must return a `resource`
    pub fn returned(resource: &str) -> Self {
        Self::new(resource, Requirement::Returned)
    }

    /// Mutation whose payload is ignored
    pub fn nothing() -> Self {
        Self::new("", Requirement::Nothing)
    }

    /// Message used when a failed envelope carries no error list
    pub fn or_fail_with(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }

    /// Unwrap `envelope` into `T` or classify it as a domain failure.
    pub fn validate<T: DeserializeOwned>(&self, envelope: Envelope<Value>) -> ApiResult<T> {
        if !envelope.success {
            return Err(ApiError::Domain(self.failure_message(&envelope)));
        }

        if self.requirement == Requirement::Nothing {
            return decode(Value::Null);
        }

        match envelope.data {
            Some(data) => decode(data),
            None => match self.requirement {
                Requirement::List => decode(Value::Array(Vec::new())),
                Requirement::Found => Err(ApiError::Domain(format!(
                    "{} not found",
                    capitalize(&self.resource)
                ))),
                Requirement::Returned => Err(ApiError::Domain(format!(
                    "No {} data returned",
                    self.resource
                ))),
                Requirement::Nothing => decode(Value::Null),
            },
        }
    }

    fn failure_message(&self, envelope: &Envelope<Value>) -> String {
        if !envelope.errors.is_empty() {
            return envelope.errors.join(", ");
        }
        match &self.default_message {
            Some(message) => message.clone(),
            None => envelope.message.clone(),
        }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidResponse(format!("Unexpected data shape: {}", e)))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
