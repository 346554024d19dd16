//! HTTP request types.
//!
//! This module provides [`HttpMethod`] and [`RequestOptions`], the mutable
//! request description that flows through the middleware request phase
//! before it is handed to the transport.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods supported by the client.
///
/// The client supports the four standard HTTP methods used by REST APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire (uppercase).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods that carry a request body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The options of an outgoing request: method, headers and serialized body.
///
/// Header names are matched case-insensitively by the accessor methods, so a
/// middleware that sets `x-trace` replaces an earlier `X-Trace`.
///
/// # Example
///
/// ```rust
/// use rest_api::{HttpMethod, RequestOptions};
///
/// let mut options = RequestOptions::new(HttpMethod::Get);
/// options.set_header("X-Trace", "1");
/// options.set_header("x-trace", "2");
///
/// assert_eq!(options.header("X-TRACE"), Some("2"));
/// assert_eq!(options.headers.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// Headers to send with the request.
    ///
    /// Names are case-insensitive on the wire. Write through
    /// [`set_header`](Self::set_header) so a later value replaces an earlier
    /// one; inserting directly under a differently-cased key leaves two
    /// entries that are collapsed into one header when sent.
    pub headers: HashMap<String, String>,
    /// The serialized request body, if any.
    pub body: Option<String>,
}

impl RequestOptions {
    /// Creates options with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Sets a header, replacing any existing header of the same name in any case.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }

    /// Removes a header (any case) and returns its value.
    pub fn remove_header(&mut self, name: &str) -> Option<String> {
        let key = self
            .headers
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()?;
        self.headers.remove(&key)
    }
}
