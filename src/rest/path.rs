//! Path composition for resource collections.
//!
//! A resource collection lives at a fixed base path (e.g. `/users`); its items
//! live below it (e.g. `/users/2`). The functions here compose those paths by
//! plain concatenation, so a facade call sends exactly what the equivalent
//! direct client call sends. The base URL is added later by the client.
//!
//! # Example
//!
//! ```rust
//! use rest_api::rest::{item_path, resource_path, ResourceOperation};
//!
//! assert_eq!(item_path("/users", "2"), "/users/2");
//! assert_eq!(resource_path("/users", ResourceOperation::Create, None), "/users");
//! assert_eq!(resource_path("/users", ResourceOperation::Update, Some("3")), "/users/3");
//! ```

use crate::clients::HttpMethod;

/// Operations that can be performed on a resource collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single item by id (GET /resources/{id}).
    Find,
    /// List the collection (GET /resources).
    All,
    /// Create a new item (POST /resources).
    Create,
    /// Update an existing item (PUT /resources/{id}).
    Update,
    /// Delete an item (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns `true` if the operation addresses a single item.
    #[must_use]
    pub const fn targets_item(&self) -> bool {
        matches!(self, Self::Find | Self::Update | Self::Delete)
    }
}

/// Appends `id` to `base_path`, separated by `/`.
///
/// The id is inserted verbatim: a `/` inside it adds path segments and a `?`
/// starts a query string, exactly as in `format!("{base_path}/{id}")`.
///
/// # Example
///
/// ```rust
/// use rest_api::rest::item_path;
///
/// assert_eq!(item_path("/users", "3"), "/users/3");
/// assert_eq!(item_path("/users", "3/comments"), "/users/3/comments");
/// ```
#[must_use]
pub fn item_path(base_path: &str, id: &str) -> String {
    format!("{base_path}/{id}")
}

/// Returns the path an operation is sent to.
///
/// Item operations use [`item_path`] when an id is given; collection
/// operations, and item operations without an id, use `base_path` unchanged.
#[must_use]
pub fn resource_path(base_path: &str, operation: ResourceOperation, id: Option<&str>) -> String {
    match id {
        Some(id) if operation.targets_item() => item_path(base_path, id),
        _ => base_path.to_string(),
    }
}
