//! HTTP transport.
//!
//! This module provides the [`HttpClient`] type, a thin wrapper over
//! `reqwest` that sends a fully prepared request and reads back its response.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::HttpError;
use crate::clients::http_request::RequestOptions;
use crate::clients::http_response::HttpResponse;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport used by [`RestClient`](crate::RestClient).
///
/// The transport owns the connection pool and the default headers. It sends
/// exactly the URL, method, headers and body it is given; composing those is
/// the job of the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use rest_api::{HttpClient, HttpMethod, RequestOptions};
///
/// let client = HttpClient::new(None)?;
/// let options = RequestOptions::new(HttpMethod::Get);
///
/// let response = client.send("https://myhost.com:3000/api/v2/users/1", &options).await?;
/// println!("{}: {}", response.status, response.body);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to start every request with.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport.
    ///
    /// # Arguments
    ///
    /// * `user_agent_prefix` - Optional prefix for the `User-Agent` header
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(user_agent_prefix: Option<&str>) -> Result<Self, HttpError> {
        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}rest-api-client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers every request starts with.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and reads its response.
    ///
    /// Non-2xx statuses are returned as ordinary responses; classifying them
    /// is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if no response could be obtained or its
    /// body could not be read.
    pub async fn send(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, HttpError> {
        let headers = Self::build_header_map(&options.headers)?;
        let mut req_builder = self
            .client
            .request(options.method.to_reqwest(), url)
            .headers(headers);

        if let Some(body) = &options.body {
            req_builder = req_builder.body(body.clone());
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        Ok(HttpResponse::from_text(status, headers, &body_text))
    }

    /// Converts request headers into a `HeaderMap` with one value per name.
    ///
    /// Names are case-insensitive on the wire. Keys that differ only in case
    /// collapse into a single header; keys are applied in sorted order so the
    /// result does not depend on map iteration order.
    fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, HttpError> {
        let mut keys: Vec<&String> = headers.keys().collect();
        keys.sort();

        let mut map = HeaderMap::with_capacity(keys.len());
        for key in keys {
            let invalid = || HttpError::InvalidHeader { name: key.clone() };
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(&headers[key]).map_err(|_| invalid())?;

            if map.insert(name, value).is_some() {
                tracing::warn!("Header '{}' set more than once with different case", key);
            }
        }
        Ok(map)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(None).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("rest-api-client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(Some("MyApp/1.0")).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("rest-api-client"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(None).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_no_authorization_in_default_headers() {
        let client = HttpClient::new(None).unwrap();
        assert!(!client.default_headers().contains_key("Authorization"));
    }

    #[test]
    fn test_parse_response_headers_groups_values() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("Set-Cookie", "a=1".parse().unwrap());
        headers.append("Set-Cookie", "b=2".parse().unwrap());
        headers.insert("X-Request-Id", "req-1".parse().unwrap());

        let parsed = HttpClient::parse_response_headers(&headers);

        assert_eq!(
            parsed.get("set-cookie"),
            Some(&vec!["a=1".to_string(), "b=2".to_string()])
        );
        assert_eq!(parsed.get("x-request-id"), Some(&vec!["req-1".to_string()]));
    }

    #[test]
    fn test_header_map_has_one_value_per_name() {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("accept".to_string(), "text/plain".to_string());
        headers.insert("X-Trace".to_string(), "1".to_string());

        let map = HttpClient::build_header_map(&headers).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_all("accept").iter().count(), 1);
        assert_eq!(map.get("x-trace").unwrap(), "1");
    }

    #[test]
    fn test_header_map_rejects_invalid_header() {
        let mut headers = HashMap::new();
        headers.insert("Bad Header".to_string(), "x".to_string());

        let result = HttpClient::build_header_map(&headers);
        assert!(matches!(
            result,
            Err(HttpError::InvalidHeader { name }) if name == "Bad Header"
        ));

        let mut headers = HashMap::new();
        headers.insert("X-Ok".to_string(), "line\nbreak".to_string());
        assert!(HttpClient::build_header_map(&headers).is_err());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
