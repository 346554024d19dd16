//! REST client implementation.
//!
//! This module provides the [`RestClient`] type, which drives every request
//! through the same pipeline:
//!
//! 1. Build the absolute URL from the current configuration
//! 2. Start the options from the default headers, the auth header and the JSON body
//! 3. Run the middleware request phase
//! 4. Send the request
//! 5. Run the middleware response phase
//! 6. Classify the response by status

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::auth::{authorization_value, TokenProvider, AUTHORIZATION_HEADER};
use crate::clients::classify::classify;
use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, RequestOptions};
use crate::clients::middleware::{MiddlewareChain, MiddlewareEntry};
use crate::config::{self, ApiConfig};
use crate::error::ConfigError;

/// Where a client reads its configuration from.
#[derive(Clone, Debug)]
enum ConfigSource {
    /// A configuration owned by the client.
    Fixed(ApiConfig),
    /// The process-wide store, re-read on every request.
    Global,
}

/// REST API client.
///
/// Provides `get`, `post`, `put` and `delete` methods that resolve with the
/// parsed response body, or fail with an [`HttpError`] whose variant tells a
/// 4xx ([`HttpError::Client`]) from a 5xx ([`HttpError::Server`]).
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
/// Concurrent calls never share their URL, options or response values.
/// Cloning a client copies its configuration, auth provider and middleware
/// registered so far; later registrations on either copy are not shared.
///
/// # Example
///
/// ```rust,ignore
/// use rest_api::{ApiConfig, RestClient};
/// use serde_json::json;
///
/// let config = ApiConfig::builder()
///     .protocol("https")
///     .host("myhost.com")
///     .port(3000)
///     .base_path("/api")
///     .version(2)
///     .build()?;
///
/// let mut client = RestClient::new(config)?;
/// client.set_auth_token(|| "my-token".to_string());
///
/// let user = client.get("/users/1").await?;
/// let created = client.post("/users", &json!({"username": "squirtle"})).await?;
/// ```
#[derive(Clone)]
pub struct RestClient {
    /// The transport used to send requests.
    http_client: HttpClient,
    /// Configuration used to compose URLs.
    config: ConfigSource,
    /// Registered middleware, in order.
    middleware: MiddlewareChain,
    /// Optional provider for the `Authorization` header.
    token_provider: Option<Arc<dyn TokenProvider>>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client bound to an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP transport cannot be created.
    pub fn new(config: ApiConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(config.user_agent_prefix())?;

        Ok(Self {
            http_client,
            config: ConfigSource::Fixed(config),
            middleware: MiddlewareChain::new(),
            token_provider: None,
        })
    }

    /// Creates a client that reads the process-wide configuration installed
    /// with [`configure`](crate::configure).
    ///
    /// The configuration is re-read on every request, so a call to
    /// `configure` made before a request takes effect for that request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Config`] with [`ConfigError::NotConfigured`] if
    /// no configuration has been installed yet, or [`HttpError::Network`] if
    /// the HTTP transport cannot be created.
    pub fn from_global() -> Result<Self, HttpError> {
        let current = config::get_config()?;
        let http_client = HttpClient::new(current.user_agent_prefix())?;

        tracing::debug!(
            "Rest client created from global configuration {}",
            current.base_url()
        );

        Ok(Self {
            http_client,
            config: ConfigSource::Global,
            middleware: MiddlewareChain::new(),
            token_provider: None,
        })
    }

    /// Returns the configuration requests are currently built from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for a global client whose store is empty.
    pub fn config(&self) -> Result<ApiConfig, ConfigError> {
        match &self.config {
            ConfigSource::Fixed(config) => Ok(config.clone()),
            ConfigSource::Global => config::get_config(),
        }
    }

    /// Returns `true` if this client follows the process-wide configuration.
    #[must_use]
    pub const fn uses_global_config(&self) -> bool {
        matches!(self.config, ConfigSource::Global)
    }

    /// Joins `path` onto the current base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for a global client whose store is empty.
    pub fn build_url(&self, path: &str) -> Result<String, ConfigError> {
        match &self.config {
            ConfigSource::Fixed(config) => Ok(config.build_url(path)),
            ConfigSource::Global => config::build_url(path),
        }
    }

    /// Returns the transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sets the provider consulted for a token before every subsequent request.
    ///
    /// Replaces any previously set provider. Requests already dispatched are
    /// unaffected.
    pub fn set_auth_token<P>(&mut self, provider: P)
    where
        P: TokenProvider + 'static,
    {
        self.token_provider = Some(Arc::new(provider));
    }

    /// Removes the token provider; subsequent requests carry no auth header.
    pub fn clear_auth_token(&mut self) {
        self.token_provider = None;
    }

    /// Returns `true` if a token provider is set.
    #[must_use]
    pub const fn has_auth_token(&self) -> bool {
        self.token_provider.is_some()
    }

    /// Appends a middleware entry.
    ///
    /// Accepts a [`MiddlewareEntry`], a [`HookPair`](crate::HookPair), or a
    /// closure `Fn(&str, &mut RequestOptions)` with annotated argument types.
    pub fn add_middleware(&mut self, entry: impl Into<MiddlewareEntry>) {
        self.middleware.add(entry);
    }

    /// Appends a closure that mutates outgoing options in place.
    pub fn add_request_mutator<F>(&mut self, mutator: F)
    where
        F: Fn(&str, &mut RequestOptions) + Send + Sync + 'static,
    {
        self.middleware.add_request_mutator(mutator);
    }

    /// Returns the registered middleware.
    #[must_use]
    pub const fn middleware(&self) -> &MiddlewareChain {
        &self.middleware
    }

    /// Sends a GET request to `path` and resolves with the parsed body.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn get(&self, path: &str) -> Result<Value, HttpError> {
        self.dispatch(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.dispatch(HttpMethod::Post, path, Some(body)).await
    }

    /// Sends a PUT request with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Value, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.dispatch(HttpMethod::Put, path, Some(body)).await
    }

    /// Sends a DELETE request to `path`.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn delete(&self, path: &str) -> Result<Value, HttpError> {
        self.dispatch(HttpMethod::Delete, path, None).await
    }

    /// Sends a GET request and deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if the body does not match `T`,
    /// or any other [`HttpError`] from the request itself.
    pub async fn get_as<T>(&self, path: &str) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let body = self.get(path).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Sends a request with an already-serialized body.
    ///
    /// `get` and `delete` are sent without a body regardless of `body`.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<Value, HttpError> {
        let body = body.filter(|_| method.has_body());
        self.dispatch(method, path, body).await
    }

    /// Builds the initial options for a request, before middleware runs.
    fn initial_options(&self, method: HttpMethod, body: Option<String>) -> RequestOptions {
        let mut options = RequestOptions::new(method);
        options.headers = self.http_client.default_headers().clone();

        if let Some(body) = body {
            options.set_header("Content-Type", "application/json");
            options.body = Some(body);
        }

        if let Some(provider) = &self.token_provider {
            if let Some(value) = authorization_value(&provider.current_token()) {
                options.set_header(AUTHORIZATION_HEADER, value);
            }
        }

        options
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<Value, HttpError> {
        let url = self.build_url(path)?;
        let options = self.initial_options(method, body);

        let (url, options) = self
            .middleware
            .run_request_phase(url, options)
            .map_err(HttpError::Middleware)?;

        tracing::debug!("Sending {} request to {}", options.method.as_str(), url);
        let response = self.http_client.send(&url, &options).await?;
        tracing::debug!("Received {} from {} {}", response.status, options.method.as_str(), url);

        let response = self
            .middleware
            .run_response_phase(response)
            .map_err(HttpError::Middleware)?;

        classify(response)
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("http_client", &self.http_client)
            .field("config", &self.config)
            .field("middleware", &self.middleware)
            .field("has_auth_token", &self.token_provider.is_some())
            .finish()
    }
}
