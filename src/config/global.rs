//! Process-wide configuration store.
//!
//! A convenience for callers who configure the API once at process start and
//! then create clients without threading an [`ApiConfig`] through their code.
//! Installing a new configuration replaces the previous one; there is no merge.
//!
//! Clients created with [`RestClient::from_global`](crate::RestClient::from_global)
//! read this store on every request, so reconfiguring before a request takes
//! effect immediately. Reconfiguring while requests are in flight is not
//! supported: each request observes whichever configuration was current when
//! it started building its URL.

use std::sync::{PoisonError, RwLock};

use super::ApiConfig;
use crate::error::ConfigError;

static GLOBAL_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);

/// Installs `config` as the process-wide configuration (last write wins).
///
/// # Example
///
/// ```rust
/// use rest_api::{configure, get_config, ApiConfig};
///
/// let config = ApiConfig::builder()
///     .protocol("https")
///     .host("myhost.com")
///     .port(3000)
///     .base_path("/api")
///     .version(2)
///     .build()
///     .unwrap();
///
/// configure(config.clone());
/// assert_eq!(get_config().unwrap(), config);
/// ```
pub fn configure(config: ApiConfig) {
    let mut slot = GLOBAL_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(previous) = slot.as_ref() {
        tracing::debug!(
            "Replacing global API configuration {} with {}",
            previous.base_url(),
            config.base_url()
        );
    }

    *slot = Some(config);
}

/// Returns a copy of the process-wide configuration.
///
/// # Errors
///
/// Returns [`ConfigError::NotConfigured`] if [`configure`] has not been called.
pub fn get_config() -> Result<ApiConfig, ConfigError> {
    GLOBAL_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(ConfigError::NotConfigured)
}

/// Returns `true` once [`configure`] has been called.
#[must_use]
pub fn is_configured() -> bool {
    GLOBAL_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Joins `relative_path` onto the base URL of the process-wide configuration.
///
/// See [`ApiConfig::build_url`] for the joining rules.
///
/// # Errors
///
/// Returns [`ConfigError::NotConfigured`] if [`configure`] has not been called.
pub fn build_url(relative_path: &str) -> Result<String, ConfigError> {
    get_config().map(|config| config.build_url(relative_path))
}
