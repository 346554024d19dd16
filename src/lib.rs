//! # REST API Client
//!
//! A lightweight client for JSON REST APIs, providing type-safe configuration,
//! URL composition, a middleware pipeline, bearer-token injection and
//! status-based error classification.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for the protocol, host, base path and API version
//! - A process-wide configuration store via [`configure`] and [`get_config`]
//! - Async HTTP requests via [`RestClient`] (`get`, `post`, `put`, `delete`)
//! - Request/response middleware via [`MiddlewareChain`] and [`HookPair`]
//! - Bearer-token injection via [`TokenProvider`]
//! - 4xx/5xx classification into [`HttpError::Client`] and [`HttpError::Server`]
//! - Base-path scoped collections via [`Resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use rest_api::{ApiConfig, Protocol};
//!
//! // Create configuration using the builder pattern
//! let config = ApiConfig::builder()
//!     .protocol(Protocol::Https)
//!     .host("myhost.com")
//!     .port(3000)
//!     .base_path("/api")
//!     .version(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.build_url("/users/1"), "https://myhost.com:3000/api/v2/users/1");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use rest_api::{ApiConfig, HttpError, RestClient};
//! use serde_json::json;
//!
//! let mut client = RestClient::new(config)?;
//! client.set_auth_token(|| load_token());
//!
//! let user = client.get("/users/1").await?;
//! let created = client.post("/users", &json!({"username": "squirtle"})).await?;
//!
//! match client.get("/users/999").await {
//!     Err(HttpError::Client(e)) => println!("{} ({})", e.message, e.code),
//!     Err(HttpError::Server(e)) => println!("server failed: {}", e.code),
//!     Err(e) => println!("other error: {e}"),
//!     Ok(body) => println!("{body}"),
//! }
//! ```
//!
//! ## Middleware
//!
//! ```rust,ignore
//! use rest_api::{HookPair, RequestOptions};
//!
//! // Mutate every outgoing request in place
//! client.add_request_mutator(|_url, options| {
//!     options.set_header("myHeader", "myValue");
//! });
//!
//! // Observe and rewrite responses
//! client.add_middleware(
//!     HookPair::new().on_response(|mut response| {
//!         response.body["modified"] = true.into();
//!         Ok(response)
//!     }),
//! );
//! ```
//!
//! ## Global Configuration
//!
//! ```rust,ignore
//! use rest_api::{configure, rest::Resources};
//!
//! configure(config);
//!
//! let users = Resources::from_global("/users")?;
//! let user = users.get(2).await?; // GET /users/2
//! ```
//!
//! ## Design Principles
//!
//! - **Explicit first**: Clients own their configuration; the global store is opt-in
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    build_url, configure, get_config, is_configured, ApiConfig, ApiConfigBuilder, ApiVersion,
    BasePath, Host, IntoProtocol, Protocol,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    authorization_value, classify, HookPair, HttpClient, HttpError, HttpMethod, HttpResponse,
    HttpResponseError, Middleware, MiddlewareChain, MiddlewareEntry, MiddlewareError,
    RequestHookResult, RequestOptions, ResponseHookResult, RestClient, StaticToken,
    TokenProvider, AUTHORIZATION_HEADER, SDK_VERSION,
};

// Re-export resource types
pub use rest::Resources;
