//! Configuration types for the REST client.
//!
//! This module provides the configuration used to compose every request URL.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: Protocol, host, port, base path and version of the API
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`Protocol`], [`Host`], [`BasePath`]: Validated newtypes for the URL parts
//! - [`ApiVersion`]: The numeric API version rendered as `v{n}`
//!
//! Clients normally receive an [`ApiConfig`] explicitly at construction time.
//! For callers who prefer to configure once at process start, the
//! [`configure`] / [`get_config`] pair installs a process-wide instance that
//! [`RestClient::from_global`](crate::RestClient::from_global) reads on every
//! request.
//!
//! # Example
//!
//! ```rust
//! use rest_api::{ApiConfig, ApiVersion, Protocol};
//!
//! let config = ApiConfig::builder()
//!     .protocol(Protocol::Https)
//!     .host("myhost.com")
//!     .port(3000)
//!     .base_path("/api")
//!     .version(ApiVersion::new(2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://myhost.com:3000/api/v2");
//! assert_eq!(config.build_url("users/1"), "https://myhost.com:3000/api/v2/users/1");
//! ```

mod global;
mod newtypes;
mod version;

pub use global::{build_url, configure, get_config, is_configured};
pub use newtypes::{BasePath, Host, Protocol};
pub use version::ApiVersion;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for reaching a REST API.
///
/// The base URL derived from this configuration is
/// `{protocol}://{host}:{port}{basePath}/v{version}`.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Serialization
///
/// The configuration reads from and writes to JSON documents using camelCase
/// field names:
///
/// ```rust
/// use rest_api::ApiConfig;
///
/// let config = ApiConfig::from_json(r#"{
///     "protocol": "https",
///     "host": "myhost.com",
///     "port": 3000,
///     "basePath": "/api",
///     "version": 2
/// }"#).unwrap();
///
/// assert_eq!(config.base_url(), "https://myhost.com:3000/api/v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    protocol: Protocol,
    host: Host,
    port: u16,
    base_path: BasePath,
    version: ApiVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_agent_prefix: Option<String>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDocument`] if the document is malformed,
    /// misses a field, or carries a value that fails validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(document).map_err(|e| ConfigError::InvalidDocument {
            reason: e.to_string(),
        })
    }

    /// Returns the protocol.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the base path.
    #[must_use]
    pub const fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    /// Returns the API version.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL, `{protocol}://{host}:{port}{basePath}/v{version}`.
    ///
    /// The result never ends with a slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}{}/{}",
            self.protocol, self.host, self.port, self.base_path, self.version
        )
    }

    /// Joins `relative_path` onto the base URL with exactly one separating slash.
    ///
    /// Any number of leading slashes on `relative_path` collapse into the single
    /// separator. An empty path yields the base URL itself.
    #[must_use]
    pub fn build_url(&self, relative_path: &str) -> String {
        let base = self.base_url();
        let relative = relative_path.trim_start_matches('/');
        if relative.is_empty() {
            return base;
        }
        format!("{base}/{relative}")
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// All URL parts (`protocol`, `host`, `port`, `base_path`, `version`) are
/// required. String-typed setters validate lazily: the first invalid value is
/// reported by [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use rest_api::ApiConfig;
///
/// let config = ApiConfig::builder()
///     .protocol("http")
///     .host("localhost")
///     .port(8080)
///     .base_path("")
///     .version(1)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "http://localhost:8080/v1");
/// ```
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    protocol: Option<Result<Protocol, ConfigError>>,
    host: Option<Result<Host, ConfigError>>,
    port: Option<u16>,
    base_path: Option<Result<BasePath, ConfigError>>,
    version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the protocol (required). Accepts a [`Protocol`] or a string such as `"https"`.
    #[must_use]
    pub fn protocol(mut self, protocol: impl IntoProtocol) -> Self {
        self.protocol = Some(protocol.into_protocol());
        self
    }

    /// Sets the host (required).
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(Host::new(host));
        self
    }

    /// Sets the port (required).
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the base path (required; may be empty).
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(BasePath::new(base_path));
        self
    }

    /// Sets the API version (required).
    #[must_use]
    pub fn version(mut self, version: impl Into<ApiVersion>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`], validating that every field is set and valid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] for the first unset field,
    /// or the validation error of the first invalid value.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let protocol = self
            .protocol
            .ok_or(ConfigError::MissingRequiredField { field: "protocol" })??;
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })??;
        let port = self
            .port
            .ok_or(ConfigError::MissingRequiredField { field: "port" })?;
        let base_path = self
            .base_path
            .ok_or(ConfigError::MissingRequiredField { field: "base_path" })??;
        let version = self
            .version
            .ok_or(ConfigError::MissingRequiredField { field: "version" })?;

        Ok(ApiConfig {
            protocol,
            host,
            port,
            base_path,
            version,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// Values accepted by [`ApiConfigBuilder::protocol`].
pub trait IntoProtocol {
    /// Converts the value into a validated [`Protocol`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProtocol`] for unsupported schemes.
    fn into_protocol(self) -> Result<Protocol, ConfigError>;
}

impl IntoProtocol for Protocol {
    fn into_protocol(self) -> Result<Protocol, ConfigError> {
        Ok(self)
    }
}

impl IntoProtocol for &str {
    fn into_protocol(self) -> Result<Protocol, ConfigError> {
        self.parse()
    }
}

impl IntoProtocol for String {
    fn into_protocol(self) -> Result<Protocol, ConfigError> {
        self.parse()
    }
}
