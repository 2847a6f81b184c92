//! Transport interceptor pipeline
//!
//! Every call goes through [`Pipeline::send`]:
//!
//! - outbound: attach the current bearer token, if any
//! - inbound success: parse the envelope and hand it back untouched
//! - inbound failure, in order: 401 eviction, security-block page,
//!   generic server/network error
//!
//! Session loss is not handled here beyond clearing the session. The
//! pipeline publishes [`PipelineEvent::SessionExpired`] and a top-level
//! coordinator decides how to get the user back to the login view.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::broadcast;

use crate::error::{ApiError, ApiResult, FailureBody};
use crate::notify::Notifier;
use crate::session::Session;
use crate::transport::{ApiRequest, RawResponse, Transport};

pub mod envelope;

pub use envelope::{Envelope, Expect, Requirement};

/// Marker the edge firewall puts in its block page
const SUPPORT_MARKER: &str = "support id";

const EVENT_CAPACITY: usize = 16;

/// Out-of-band events for the top-level coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// The session was evicted after a 401; navigate to the login view
    SessionExpired,
    /// A request was rejected by the edge firewall
    SecurityBlocked { ticket: String },
}

/// Interceptor pipeline around a [`Transport`].
pub struct Pipeline {
    transport: Arc<dyn Transport>,
    session: Session,
    notifier: Arc<dyn Notifier>,
    events: broadcast::Sender<PipelineEvent>,
}

impl Pipeline {
    pub fn new(transport: Arc<dyn Transport>, session: Session, notifier: Arc<dyn Notifier>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            transport,
            session,
            notifier,
            events,
        }
    }

    /// Read-only view of the session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Subscribe to pipeline events
    pub fn subscribe(&self) -> broadcast::Receiver<PipelineEvent> {
        self.events.subscribe()
    }

    /// Store a freshly issued token (and optional identity record).
    pub fn login(&self, token: &str, user: Option<&str>) -> std::io::Result<()> {
        log::info!("Session established");
        self.session.establish(token, user)
    }

    /// Explicitly end the session.
    pub fn logout(&self) -> std::io::Result<()> {
        log::info!("Session cleared by logout");
        self.session.clear()
    }

    /// Send a request through every stage of the pipeline.
    pub async fn send(&self, request: ApiRequest) -> ApiResult<Envelope<Value>> {
        let (request, token) = self.authorize(request);

        let response = match self.transport.execute(&request).await {
            Ok(response) => response,
            Err(err) => {
                log::debug!("{} {} failed: {}", request.method, request.path, err);
                return Err(err);
            }
        };

        if response.is_success() {
            return Envelope::parse(&response.body);
        }

        Err(self.classify_failure(&request, response, token.as_deref()))
    }

    /// Outbound stage: attach the bearer token read at dispatch time.
    fn authorize(&self, request: ApiRequest) -> (ApiRequest, Option<String>) {
        match self.session.token() {
            Some(token) => {
                let request = request.with_header("Authorization", format!("Bearer {}", token));
                (request, Some(token))
            }
            None => (request, None),
        }
    }

    /// Inbound failure stage.
    ///
    /// Any non-2xx that is neither a 401 nor a block page becomes
    /// [`ApiError::Server`], even when the body is a `success: false`
    /// envelope. Only 2xx envelopes reach the domain-failure path in
    /// `Expect`. Both carry the parsed `{message, errors}`, so the user sees
    /// the same text either way.
    fn classify_failure(
        &self,
        request: &ApiRequest,
        response: RawResponse,
        token: Option<&str>,
    ) -> ApiError {
        if response.status == 401 {
            if self.session.evict(token) {
                log::info!(
                    "{} {} returned 401; session evicted",
                    request.method,
                    request.path
                );
                // Nobody listening is fine
                let _ = self.events.send(PipelineEvent::SessionExpired);
            }
            return ApiError::SessionExpired;
        }

        if response.is_html() && response.body.to_lowercase().contains(SUPPORT_MARKER) {
            let ticket = extract_ticket(&response.body);
            log::warn!(
                "{} {} rejected by edge firewall (support id {})",
                request.method,
                request.path,
                ticket
            );
            self.notifier.alert(&format!(
                "The requested URL was rejected. Please consult with your administrator. Your support ID is: {}",
                ticket
            ));
            let _ = self.events.send(PipelineEvent::SecurityBlocked {
                ticket: ticket.clone(),
            });
            return ApiError::SecurityBlocked { ticket };
        }

        log::debug!(
            "{} {} failed with status {}",
            request.method,
            request.path,
            response.status
        );
        let detail = FailureBody::parse(&response.body);
        ApiError::Server {
            status: response.status,
            body: response.body,
            detail,
        }
    }
}

/// Support ticket id: every digit in the block page, in order.
pub fn extract_ticket(body: &str) -> String {
    body.chars().filter(char::is_ascii_digit).collect()
}
