//! Client error taxonomy and user-facing message derivation.

use thiserror::Error;

/// Fallback text when nothing better can be derived from a failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors surfaced by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication is irrecoverable: there was no refresh token, or the
    /// refresh call itself failed. The session has been torn down.
    #[error("session expired")]
    SessionExpired,

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, connect, I/O).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the backend produced one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this failure means the endpoint is simply not implemented on
    /// this backend. Stores degrade to derived/empty results on these.
    #[must_use]
    pub fn is_missing_endpoint(&self) -> bool {
        matches!(self.status(), Some(404 | 501))
    }

    /// Human-readable message for display, derived in priority order:
    /// server-provided detail/message, transport error text, generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::SessionExpired => "Session expired. Please login again.".to_string(),
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            Self::Transport(message) if !message.is_empty() => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Pull the best server-provided message out of an error body.
///
/// Checked in priority order: `detail`, then `message`, then `error` (the
/// workflow endpoints use the last one). Non-JSON bodies yield `None`.
pub(crate) fn derive_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    for key in ["detail", "message", "error"] {
        if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}
