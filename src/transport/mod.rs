//! Transport layer: wire-format details (JSON serialization/deserialization).

mod alert;
mod parts;

pub use alert::{decode_alert_response, encode_alert_request};
pub use parts::{decode_parts_response, encode_parts_request};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
