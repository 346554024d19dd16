//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the string parts of an
//! [`ApiConfig`](crate::ApiConfig) that validate their contents on construction.
//! Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The URL scheme used to reach the API.
///
/// # Example
///
/// ```rust
/// use rest_api::Protocol;
///
/// let protocol: Protocol = "HTTPS".parse().unwrap();
/// assert_eq!(protocol, Protocol::Https);
/// assert_eq!(protocol.to_string(), "https");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Plain-text HTTP.
    Http,
    /// HTTP over TLS.
    Https,
}

impl Protocol {
    /// Returns the scheme as it appears in a URL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let scheme = trimmed.strip_suffix("://").unwrap_or(trimmed);
        match scheme.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(ConfigError::InvalidProtocol {
                protocol: s.to_string(),
            }),
        }
    }
}

impl Serialize for Protocol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Protocol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A validated API host name.
///
/// The host is stored lowercased and must not carry a scheme, port, path or
/// whitespace; those belong to the other configuration fields.
///
/// # Example
///
/// ```rust
/// use rest_api::Host;
///
/// let host = Host::new("MyHost.com").unwrap();
/// assert_eq!(host.as_ref(), "myhost.com");
///
/// assert!(Host::new("https://myhost.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Host(String);

impl Host {
    /// Creates a new validated host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHost`] if the host is empty, or
    /// [`ConfigError::InvalidHost`] if it contains a scheme, port, path or whitespace.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        let host = host.trim().to_lowercase();

        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let is_valid = host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if !is_valid || host.starts_with('.') || host.ends_with('.') {
            return Err(ConfigError::InvalidHost { host });
        }

        Ok(Self(host))
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A normalized path prefix placed between the port and the version segment.
///
/// The stored form always starts with `/` and never ends with one, so it can
/// be concatenated directly after `host:port`. An empty prefix is allowed and
/// renders as nothing.
///
/// # Example
///
/// ```rust
/// use rest_api::BasePath;
///
/// assert_eq!(BasePath::new("api/").unwrap().as_ref(), "/api");
/// assert_eq!(BasePath::new("/").unwrap().as_ref(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Creates a new normalized base path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBasePath`] if the path contains whitespace,
    /// a query string or a fragment.
    pub fn new(path: impl Into<String>) -> Result<Self, ConfigError> {
        let path = path.into();
        let trimmed = path.trim().trim_matches('/');

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '#'))
        {
            return Err(ConfigError::InvalidBasePath { path });
        }

        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        Ok(Self(format!("/{trimmed}")))
    }

    /// Returns `true` if no prefix is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BasePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BasePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_parses_case_insensitively() {
        assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!("HTTPS".parse::<Protocol>().unwrap(), Protocol::Https);
        assert_eq!("https://".parse::<Protocol>().unwrap(), Protocol::Https);
    }

    #[test]
    fn test_protocol_rejects_unknown_scheme() {
        let result = "ftp".parse::<Protocol>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidProtocol { protocol }) if protocol == "ftp"
        ));
    }

    #[test]
    fn test_host_rejects_empty_string() {
        assert!(matches!(Host::new(""), Err(ConfigError::EmptyHost)));
        assert!(matches!(Host::new("   "), Err(ConfigError::EmptyHost)));
    }

    #[test]
    fn test_host_rejects_scheme_port_and_path() {
        assert!(Host::new("https://myhost.com").is_err());
        assert!(Host::new("myhost.com:3000").is_err());
        assert!(Host::new("myhost.com/api").is_err());
        assert!(Host::new("my host.com").is_err());
        assert!(Host::new(".myhost.com").is_err());
    }

    #[test]
    fn test_host_accepts_names_and_addresses() {
        assert_eq!(Host::new("localhost").unwrap().as_ref(), "localhost");
        assert_eq!(Host::new("127.0.0.1").unwrap().as_ref(), "127.0.0.1");
        assert_eq!(Host::new("API.Example.com").unwrap().as_ref(), "api.example.com");
    }

    #[test]
    fn test_base_path_normalizes_slashes() {
        assert_eq!(BasePath::new("/api").unwrap().as_ref(), "/api");
        assert_eq!(BasePath::new("api").unwrap().as_ref(), "/api");
        assert_eq!(BasePath::new("/api/").unwrap().as_ref(), "/api");
        assert_eq!(BasePath::new("//api/internal//").unwrap().as_ref(), "/api/internal");
    }

    #[test]
    fn test_base_path_allows_empty() {
        assert!(BasePath::new("").unwrap().is_empty());
        assert!(BasePath::new("/").unwrap().is_empty());
    }

    #[test]
    fn test_base_path_rejects_query_and_whitespace() {
        assert!(BasePath::new("/api?x=1").is_err());
        assert!(BasePath::new("/api#top").is_err());
        assert!(BasePath::new("/my api").is_err());
    }

    #[test]
    fn test_newtypes_deserialize_with_validation() {
        let host: Host = serde_json::from_str(r#""myhost.com""#).unwrap();
        assert_eq!(host.as_ref(), "myhost.com");

        let result: Result<Host, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());

        let protocol: Protocol = serde_json::from_str(r#""https""#).unwrap();
        assert_eq!(protocol, Protocol::Https);
    }
}
