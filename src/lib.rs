//! Typed Rust client for the Notifox alert-delivery API.
//!
//! The design has three layers: a domain layer of strong types, a transport
//! layer for the JSON wire format, and a small client layer orchestrating
//! requests, retries, and error classification.
//!
//! ```rust,no_run
//! use notifox::{AlertRequest, Audience, Channel, MessageText, NotifoxClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), notifox::NotifoxError> {
//!     let client = NotifoxClient::new("...")?;
//!     let request = AlertRequest::new(
//!         Audience::new("ops-oncall")?,
//!         MessageText::new("disk almost full")?,
//!     )
//!     .with_channel(Channel::Sms);
//!     let response = client.send_alert(request).await?;
//!     println!("delivered as {} ({} parts)", response.message_id, response.parts);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT, ENV_API_KEY, HttpResponse,
    HttpTransport, NotifoxClient, NotifoxClientBuilder, NotifoxError, RETRY_BACKOFF_STEP,
};
pub use domain::{
    AlertRequest, AlertResponse, ApiKey, Audience, BaseUrl, Channel, MessageText, PartsResponse,
    ValidationError,
};
