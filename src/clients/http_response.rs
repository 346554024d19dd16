//! HTTP response types.
//!
//! This module provides [`HttpResponse`], the value that flows through the
//! middleware response phase before it is classified.

use std::collections::HashMap;

use serde_json::Value;

/// An HTTP response received from the API.
///
/// The body is parsed once, right after it is read from the transport:
///
/// - an empty body becomes [`Value::Null`]
/// - a JSON body becomes the parsed value
/// - anything else is kept verbatim as [`Value::String`]
///
/// Response middleware may rewrite any field, including `body`; whatever the
/// chain returns is what gets classified and handed to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a response from already-parsed parts.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates a response from a raw body, parsing it as JSON when possible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rest_api::HttpResponse;
    /// use serde_json::{json, Value};
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::from_text(200, HashMap::new(), r#"{"_id": 3}"#);
    /// assert_eq!(response.body, json!({"_id": 3}));
    ///
    /// let response = HttpResponse::from_text(502, HashMap::new(), "Bad Gateway");
    /// assert_eq!(response.body, Value::String("Bad Gateway".to_string()));
    /// ```
    #[must_use]
    pub fn from_text(status: u16, headers: HashMap<String, Vec<String>>, text: &str) -> Self {
        Self::new(status, headers, parse_body(text))
    }

    /// Returns `true` if the status is below 400.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status < 400
    }

    /// Returns `true` if the status is in the 4xx range.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns `true` if the status is 500 or above.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500
    }

    /// Returns the first value of a header. The lookup is case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Parses a response body; never fails.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
