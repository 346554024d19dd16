//! Resource collections.
//!
//! This module provides a thin layer over [`RestClient`](crate::RestClient)
//! for REST collections addressed by a fixed base path:
//!
//! - **[`Resources`]**: binds a client to a base path and exposes id-based
//!   `get`, `post`, `put` and `delete`
//! - **Path composition**: [`item_path`], [`resource_path`] and
//!   [`ResourceOperation`]
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_api::rest::Resources;
//!
//! let users = Resources::from_global("/users")?;
//!
//! // Same request as client.get("/users/2")
//! let user = users.get("2").await?;
//! println!("User: {}", user["username"]);
//! ```

mod path;
mod resource;

pub use path::{item_path, resource_path, ResourceOperation};
pub use resource::Resources;
