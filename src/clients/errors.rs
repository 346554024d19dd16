//! HTTP-specific error types.
//!
//! This module contains the error taxonomy surfaced by every request method.
//!
//! # Error Handling
//!
//! Every failure reaches the caller of the verb method; nothing is retried or
//! swallowed:
//!
//! - [`HttpError::Config`]: The configuration is missing (global clients only)
//! - [`HttpError::Network`]: The transport failed and no response was obtained
//! - [`HttpError::Client`]: The API answered with a 4xx status
//! - [`HttpError::Server`]: The API answered with a 5xx status
//! - [`HttpError::Serialization`]: A body could not be encoded or decoded
//! - [`HttpError::Middleware`]: A middleware hook returned an error
//! - [`HttpError::InvalidHeader`]: A header name or value cannot be sent
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_api::HttpError;
//!
//! match client.get("/users/666").await {
//!     Ok(user) => println!("User: {user}"),
//!     Err(HttpError::Client(e)) => {
//!         println!("Rejected with {}: {} ({})", e.code, e.message, e.data);
//!     }
//!     Err(HttpError::Server(e)) => println!("Server failed with {}", e.code),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::error::ConfigError;

/// Error type returned by middleware hooks.
///
/// It is propagated unchanged inside [`HttpError::Middleware`].
pub type MiddlewareError = Box<dyn std::error::Error + Send + Sync>;

/// A non-successful HTTP response.
///
/// Carries the status code, a human-readable message and the parsed response
/// body. The body is preserved verbatim; fields inside it (such as an
/// application-level `code`) never influence classification.
///
/// # Example
///
/// ```rust
/// use rest_api::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::new(404, json!({"code": 1401}));
///
/// assert_eq!(error.code, 404);
/// assert_eq!(error.message, "Not Found");
/// assert_eq!(error.data["code"], 1401);
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message} (status {code})")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable description of the failure.
    pub message: String,
    /// The parsed response body.
    pub data: Value,
}

impl HttpResponseError {
    /// Creates an error from a status code and parsed body.
    ///
    /// The message is taken from the body's `message` field when present: a
    /// string is used as-is, any other JSON value is rendered as JSON text.
    /// Otherwise the status code's canonical reason phrase is used.
    #[must_use]
    pub fn new(code: u16, data: Value) -> Self {
        let message = match data.get("message") {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(Value::Null | Value::String(_)) | None => generic_message(code),
            Some(other) => other.to_string(),
        };

        Self {
            code,
            message,
            data,
        }
    }
}

fn generic_message(code: u16) -> String {
    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map_or_else(
            || format!("Request failed with status {code}"),
            String::from,
        )
}

/// Unified error type for all request failures.
///
/// Use pattern matching to handle specific failure classes, or the helper
/// accessors to inspect the status and body without matching.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API configuration is unavailable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Network or connection error; no response was obtained.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a 4xx status.
    #[error("Client error: {0}")]
    Client(HttpResponseError),

    /// The API answered with a 5xx status.
    #[error("Server error: {0}")]
    Server(HttpResponseError),

    /// A request body could not be serialized, or a response body could not
    /// be deserialized into the requested type.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A middleware hook failed.
    #[error("Middleware error: {0}")]
    Middleware(#[source] MiddlewareError),

    /// A request header name or value is not valid HTTP.
    #[error("Invalid header '{name}'")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

impl HttpError {
    /// Returns the response error for 4xx/5xx failures.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Client(e) | Self::Server(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status for 4xx/5xx failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|e| e.code)
    }

    /// Returns the parsed error body for 4xx/5xx failures.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.response().map(|e| &e.data)
    }

    /// Returns `true` for 4xx failures.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Client(_))
    }

    /// Returns `true` for 5xx failures.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Server(_))
    }
}
