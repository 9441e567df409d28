//! Error taxonomy and the status-code classifier.
//!
//! Classification is a pure function over the HTTP status and the raw body;
//! the retry decision is a separate predicate on the resulting variant so the
//! two can be tested independently of any HTTP mechanics.

use std::error::Error as StdError;

use serde::Deserialize;

use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NotifoxClient`](crate::NotifoxClient).
///
/// Every failed exchange is classified exactly once and returned as-is;
/// the client never downgrades or hides a variant.
pub enum NotifoxError {
    /// The service rejected the credential (401 or 403).
    #[error("authentication failed ({status}){}", text_suffix(.response_text))]
    Authentication {
        status: u16,
        response_text: Option<String>,
    },

    /// The account balance does not cover the delivery (402).
    #[error("insufficient balance{}", text_suffix(.response_text))]
    InsufficientBalance { response_text: Option<String> },

    /// The service throttled the caller (429).
    #[error("rate limit exceeded{}", text_suffix(.response_text))]
    RateLimited { response_text: Option<String> },

    /// Any other non-2xx response, or a 2xx response whose body failed to
    /// decode (carrying the 2xx status and the raw body: the server claimed
    /// success but returned an unusable payload).
    #[error("API error ({status}){}", text_suffix(.response_text))]
    Api {
        status: u16,
        response_text: Option<String>,
    },

    /// The exchange never produced a status code: DNS, connect, timeout,
    /// body-read, or request-encoding failure.
    #[error("connection failed: {0}")]
    Connection(#[source] Box<dyn StdError + Send + Sync>),

    /// A domain constructor or the client builder rejected an invalid value.
    /// Never reaches the network.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl NotifoxError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Authentication and rate-limit failures are terminal, as are API errors
    /// with a 4xx status. Everything else (5xx, decode failures on a claimed
    /// success, balance shortfalls, connection failures) may be transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Authentication { .. } | Self::RateLimited { .. } | Self::Validation(_) => false,
            Self::Api { status, .. } => !(400..500).contains(status),
            Self::InsufficientBalance { .. } | Self::Connection(_) => true,
        }
    }
}

fn text_suffix(text: &Option<String>) -> String {
    match text {
        Some(text) => format!(": {text}"),
        None => String::new(),
    }
}

/// Standard error envelope returned by the service on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: String,
}

/// Classify a non-2xx response into exactly one [`NotifoxError`] variant.
pub(crate) fn classify_response(status: u16, raw_body: &str) -> NotifoxError {
    let response_text = resolve_response_text(status, raw_body);
    match status {
        401 | 403 => NotifoxError::Authentication {
            status,
            response_text,
        },
        402 => NotifoxError::InsufficientBalance { response_text },
        429 => NotifoxError::RateLimited { response_text },
        _ => NotifoxError::Api {
            status,
            response_text,
        },
    }
}

/// A 2xx response whose body failed to decode. Surfaced as an API error
/// carrying the raw body, not a connection error.
pub(crate) fn invalid_success_body(status: u16, raw_body: &str) -> NotifoxError {
    NotifoxError::Api {
        status,
        response_text: non_empty(raw_body),
    }
}

fn resolve_response_text(status: u16, raw_body: &str) -> Option<String> {
    // 401 bodies are plain text by service contract; skip envelope parsing.
    if status != 401 {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(raw_body) {
            if !envelope.error.is_empty() {
                return Some(envelope.error);
            }
        }
    }
    non_empty(raw_body)
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}
