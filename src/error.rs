//! Error types for the console core.
//!
//! Remote rejections are not errors: a non-2xx controller reply is data
//! (`Outcome::Rejected`) and flows to the notification channel. The enums
//! here cover what fails locally before or around the wire call.

/// Top-level error type for the console.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while building a provisioning request from the form.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// A tag field was non-empty but held no leading base-10 integer.
    #[error("{field} is not a number: '{value}'")]
    InvalidTagNumber { field: &'static str, value: String },
}

/// Errors raised by the transport client around the wire call.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The controller answered 2xx but the body held no readable `circuit_id`.
    #[error("Malformed provisioning response: {0}")]
    MalformedResponse(String),
}
