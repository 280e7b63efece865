/// Document container contract
///
/// A container is a keyed collection of JSON documents. The partition key of
/// every document equals its `id`, so point operations only need the id.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures surfaced by a container
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with the requested id
    #[error("document '{0}' not found")]
    NotFound(String),

    /// A document with the same id already exists
    #[error("document '{0}' already exists")]
    Conflict(String),

    /// Any other backend or (de)serialization failure, kept verbatim
    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Equality predicate on a top-level document field
///
/// The value is always bound as a query parameter by the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: &'static str,
    pub value: String,
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Point and query operations over one container
#[async_trait]
pub trait Container: Send + Sync + std::fmt::Debug {
    /// Container name, used in logs
    fn name(&self) -> &str;

    /// Point read by id
    async fn read_item(&self, id: &str) -> Result<Value, StoreError>;

    /// Insert a new document; the body must carry a string `id`
    async fn create_item(&self, body: &Value) -> Result<(), StoreError>;

    /// Overwrite an existing document
    async fn replace_item(&self, id: &str, body: &Value) -> Result<(), StoreError>;

    /// Remove a document
    async fn delete_item(&self, id: &str) -> Result<(), StoreError>;

    /// All documents, or only those matching `filter`
    async fn query_items(&self, filter: Option<&Filter>) -> Result<Vec<Value>, StoreError>;
}
