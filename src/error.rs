//! Configuration error types.
//!
//! This module contains the error returned when an [`ApiConfig`] cannot be
//! built or validated, and when the process-wide configuration is read
//! before it has been installed.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use rest_api::{ConfigError, Host};
//!
//! let result = Host::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyHost)));
//! ```
//!
//! [`ApiConfig`]: crate::ApiConfig

use thiserror::Error;

/// Errors that can occur while building or reading API configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The process-wide configuration was read before [`configure`](crate::configure) was called.
    #[error("API configuration has not been set. Call `configure` before creating a global client.")]
    NotConfigured,

    /// Host cannot be empty.
    #[error("Host cannot be empty. Please provide a host name such as 'api.example.com'.")]
    EmptyHost,

    /// Host contains characters that do not belong in a host name.
    #[error("Invalid host '{host}'. Expected a bare host name without scheme, path or whitespace.")]
    InvalidHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// Protocol is not one of the supported schemes.
    #[error("Invalid protocol '{protocol}'. Expected 'http' or 'https'.")]
    InvalidProtocol {
        /// The invalid protocol that was provided.
        protocol: String,
    },

    /// Base path contains characters that do not belong in a path prefix.
    #[error("Invalid base path '{path}'. Expected a path prefix such as '/api'.")]
    InvalidBasePath {
        /// The invalid path that was provided.
        path: String,
    },

    /// API version could not be parsed.
    #[error("Invalid API version '{version}'. Expected a positive integer such as '2' or 'v2'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Configuration document could not be parsed.
    #[error("Invalid configuration document: {reason}")]
    InvalidDocument {
        /// The parser's description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_error_message() {
        let message = ConfigError::NotConfigured.to_string();
        assert!(message.contains("has not been set"));
        assert!(message.contains("configure"));
    }

    #[test]
    fn test_invalid_protocol_error_message() {
        let error = ConfigError::InvalidProtocol {
            protocol: "ftp".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp"));
        assert!(message.contains("'http' or 'https'"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "host" };
        let message = error.to_string();
        assert!(message.contains("host"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyHost;
        let _: &dyn std::error::Error = &error;
    }
}
