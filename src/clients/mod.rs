//! HTTP client types.
//!
//! This module provides the request/response pipeline of the crate.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RestClient`]: The client with `get`, `post`, `put` and `delete` methods
//! - [`HttpClient`]: The `reqwest` transport the client sends through
//! - [`RequestOptions`]: Method, headers and body of an outgoing request
//! - [`HttpResponse`]: Status, headers and parsed body of a response
//! - [`MiddlewareChain`], [`MiddlewareEntry`], [`Middleware`], [`HookPair`]:
//!   Request and response interception
//! - [`TokenProvider`], [`StaticToken`]: Sources for the bearer token
//! - [`HttpError`], [`HttpResponseError`]: The error taxonomy
//! - [`classify`]: Maps a response to its body or a typed error
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_api::{ApiConfig, HookPair, RequestOptions, RestClient};
//!
//! let mut client = RestClient::new(config)?;
//!
//! // Request-only middleware mutates the options in place
//! client.add_request_mutator(|_url, options| {
//!     options.set_header("Myheader", "hello world");
//! });
//!
//! // A hook pair can also rewrite the response
//! client.add_middleware(HookPair::new().on_response(|mut response| {
//!     response.body["modified"] = true.into();
//!     Ok(response)
//! }));
//!
//! let body = client.get("/myHeader").await?;
//! assert_eq!(body["modified"], true);
//! ```

mod auth;
mod classify;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod middleware;
pub mod rest;

pub use auth::{authorization_value, StaticToken, TokenProvider, AUTHORIZATION_HEADER};
pub use classify::classify;
pub use errors::{HttpError, HttpResponseError, MiddlewareError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, RequestOptions};
pub use http_response::HttpResponse;
pub use middleware::{
    HookPair, Middleware, MiddlewareChain, MiddlewareEntry, RequestHookResult,
    ResponseHookResult,
};

pub use rest::RestClient;
