//! The [`Resources`] facade.
//!
//! Binds a [`RestClient`] to a collection base path so callers address items
//! by id instead of repeating a literal path. Every method is a plain
//! delegation to the client with a composed path; the facade holds no other
//! state.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpError, RestClient};
use crate::rest::path::{resource_path, ResourceOperation};

/// A resource collection addressed through a fixed base path.
///
/// # Example
///
/// ```rust,ignore
/// use rest_api::{RestClient, rest::Resources};
/// use serde_json::json;
///
/// let users = Resources::new(client, "/users");
///
/// let luck = users.get("2").await?;                       // GET    /users/2
/// let created = users.post(&json!({"username": "x"})).await?; // POST   /users
/// let updated = users.put("3", &json!({"email": "y"})).await?; // PUT    /users/3
/// let deleted = users.delete("3").await?;                 // DELETE /users/3
/// ```
#[derive(Clone, Debug)]
pub struct Resources {
    client: RestClient,
    base_path: String,
}

impl Resources {
    /// Binds `client` to `base_path`.
    #[must_use]
    pub fn new(client: RestClient, base_path: impl Into<String>) -> Self {
        Self {
            client,
            base_path: base_path.into(),
        }
    }

    /// Binds a new global-configuration client to `base_path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Config`] if [`configure`](crate::configure) has
    /// not been called yet.
    pub fn from_global(base_path: impl Into<String>) -> Result<Self, HttpError> {
        Ok(Self::new(RestClient::from_global()?, base_path))
    }

    /// Returns the collection base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &RestClient {
        &self.client
    }

    /// Returns the underlying client mutably, e.g. to set a token or add middleware.
    pub fn client_mut(&mut self) -> &mut RestClient {
        &mut self.client
    }

    /// Returns the path `operation` is sent to for `id`.
    #[must_use]
    pub fn path(&self, operation: ResourceOperation, id: Option<&str>) -> String {
        resource_path(&self.base_path, operation, id)
    }

    /// Fetches the item with `id`.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn get(&self, id: impl Display) -> Result<Value, HttpError> {
        self.send(ResourceOperation::Find, Some(&id.to_string()), None)
            .await
    }

    /// Fetches the item with `id` and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if the body does not match `T`,
    /// or any other [`HttpError`] from the request itself.
    pub async fn get_as<T>(&self, id: impl Display) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let body = self.get(id).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches the whole collection.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn list(&self) -> Result<Value, HttpError> {
        self.send(ResourceOperation::All, None, None).await
    }

    /// Creates an item from `body`.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn post<B>(&self, body: &B) -> Result<Value, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.send(ResourceOperation::Create, None, Some(body)).await
    }

    /// Replaces the item with `id` by `body`.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn put<B>(&self, id: impl Display, body: &B) -> Result<Value, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.send(ResourceOperation::Update, Some(&id.to_string()), Some(body))
            .await
    }

    /// Deletes the item with `id`.
    ///
    /// # Errors
    ///
    /// See [`HttpError`] for the failure classes.
    pub async fn delete(&self, id: impl Display) -> Result<Value, HttpError> {
        self.send(ResourceOperation::Delete, Some(&id.to_string()), None)
            .await
    }

    /// Sends `operation` with the method it maps to.
    async fn send(
        &self,
        operation: ResourceOperation,
        id: Option<&str>,
        body: Option<String>,
    ) -> Result<Value, HttpError> {
        let path = self.path(operation, id);
        self.client
            .request(operation.http_method(), &path, body)
            .await
    }
}
