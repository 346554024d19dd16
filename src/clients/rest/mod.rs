//! REST API client.
//!
//! This module provides [`RestClient`], the client that composes URLs from an
//! [`ApiConfig`](crate::ApiConfig), attaches the auth header, runs the
//! middleware chain, and classifies responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_api::{configure, ApiConfig, RestClient};
//!
//! // Configure once at process start
//! configure(ApiConfig::from_json(include_str!("api.json"))?);
//!
//! // Clients created anywhere afterwards follow that configuration
//! let client = RestClient::from_global()?;
//! let user = client.get("/users/1").await?;
//! println!("User: {}", user["username"]);
//! ```
//!
//! # Request Pipeline
//!
//! Each call makes a single pass with no retries and no rollback:
//!
//! - The `Authorization` header is added before middleware runs, so request
//!   middleware can inspect, override or remove it
//! - Request middleware runs in registration order; what it returns is sent
//! - Response middleware runs in registration order; what it returns is classified
//! - Statuses below 400 resolve with the parsed body; 4xx and 5xx become
//!   [`HttpError::Client`](crate::HttpError::Client) and
//!   [`HttpError::Server`](crate::HttpError::Server)

mod client;

pub use client::RestClient;
