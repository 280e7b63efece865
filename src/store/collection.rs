/// Typed accessor over a document container

use crate::store::container::{Container, Filter, StoreError};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, marker::PhantomData, sync::Arc};

/// Converts between records of type `T` and the container's JSON documents
///
/// Cheap to clone: only the container handle is shared.
pub struct Collection<T> {
    container: Arc<dyn Container>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            container: Arc::clone(&self.container),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("container", &self.container.name())
            .finish()
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self {
            container,
            _record: PhantomData,
        }
    }

    pub async fn get(&self, id: &str) -> Result<T, StoreError> {
        let document = self.container.read_item(id).await?;
        Ok(serde_json::from_value(document)?)
    }

    /// `true` when a record with this id is stored
    pub async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        match self.container.read_item(id).await {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, record: &T) -> Result<(), StoreError> {
        self.container.create_item(&serde_json::to_value(record)?).await
    }

    pub async fn replace(&self, id: &str, record: &T) -> Result<(), StoreError> {
        self.container
            .replace_item(id, &serde_json::to_value(record)?)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.container.delete_item(id).await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.decode_all(self.container.query_items(None).await?)
    }

    /// Records whose `field` equals `value` exactly
    pub async fn find_by(&self, field: &'static str, value: &str) -> Result<Vec<T>, StoreError> {
        let filter = Filter::eq(field, value);
        self.decode_all(self.container.query_items(Some(&filter)).await?)
    }

    fn decode_all(&self, documents: Vec<serde_json::Value>) -> Result<Vec<T>, StoreError> {
        documents
            .into_iter()
            .map(|d| serde_json::from_value(d).map_err(StoreError::from))
            .collect()
    }
}
