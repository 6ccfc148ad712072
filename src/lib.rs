//! Typed Rust client for the CheckMobi SMS and phone validation HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format details (endpoint table, headers, status classification), and a small
//! client layer that validates arguments and orchestrates requests.
//!
//! ```rust,no_run
//! use checkmobi::{ApiSecret, CallOptions, CheckMobiClient, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), checkmobi::CheckMobiError> {
//!     let client = CheckMobiClient::new(ApiSecret::new("...")?);
//!     let message = SendMessage::new("+40700000000", "hello");
//!     let sent = client.send_message(&message, CallOptions::default()).await?;
//!     println!("queued as {}", sent.id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BASE_URL_ENV, CheckMobiClient, CheckMobiClientBuilder, CheckMobiError, SECRET_KEY_ENV,
};
pub use domain::{
    ApiSecret, CallOptions, CountryPrefix, MessageId, MessageInformation, NumberInformation,
    Platform, RemoteConfig, SendMessage, SendMessageResponse, ValidatePhone, ValidationError,
    ValidationId, ValidationRequestResponse, ValidationStatus, VerificationType,
    VerifyPinResponse, validate_message,
};
pub use transport::{DEFAULT_BASE_URL, Endpoint, EndpointError, Method};
