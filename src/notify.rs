//! Notification boundary
//!
//! The core decides *that* the user should be told something and *what*;
//! rendering belongs to whoever implements [`Notifier`].

use std::sync::Mutex;

use crate::error::ApiError;

/// Message used when nothing more specific is available
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A (kind, text) pair handed to the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Error notification for a failed call
    pub fn from_failure(err: &ApiError) -> Self {
        Self::error(failure_message(err))
    }
}

/// Receiver of user-facing messages.
pub trait Notifier: Send + Sync {
    /// Regular (toast-style) notification
    fn notify(&self, notification: Notification);

    /// Blocking alert the user must acknowledge and report verbatim
    fn alert(&self, message: &str);
}

/// Resolve the user-facing text for a failure.
///
/// Precedence: failure-body error list, failure-body message, the
/// transport's own message, then [`FALLBACK_MESSAGE`].
pub fn failure_message(err: &ApiError) -> String {
    if let Some(body) = err.failure_body() {
        if !body.errors.is_empty() {
            return body.errors.join(", ");
        }
        if let Some(message) = body.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
    }

    let generic = err.to_string();
    if generic.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        generic
    }
}

/// Notifier that remembers everything it was given.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut n) = self.notifications.lock() {
            n.push(notification);
        }
    }

    fn alert(&self, message: &str) {
        if let Ok(mut a) = self.alerts.lock() {
            a.push(message.to_string());
        }
    }
}
