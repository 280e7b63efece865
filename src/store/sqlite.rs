/// SQLite-backed document container
///
/// Each container is one table holding the JSON document next to its id.
/// Documents are stored as text and queried with SQLite's JSON functions.

use crate::config::is_identifier;
use crate::store::container::{Container, Filter, StoreError};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{sqlite::SqlitePool, Row};

/// A document container living in one SQLite table
#[derive(Debug, Clone)]
pub struct SqliteContainer {
    pool: SqlitePool,
    name: String,
}

impl SqliteContainer {
    /// Open a container, creating its table if it does not exist yet
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn open(pool: SqlitePool, name: &str) -> Result<Self, StoreError> {
        if !is_identifier(name) {
            return Err(StoreError::Backend(format!("invalid container name '{}'", name)));
        }

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {name} (
                id TEXT PRIMARY KEY,
                document TEXT NOT NULL
            )
            "#
        ))
        .execute(&pool)
        .await?;

        tracing::debug!("📦 Container ready: {}", name);

        Ok(Self {
            pool,
            name: name.to_string(),
        })
    }
}

fn document_id(body: &Value) -> Result<&str, StoreError> {
    body.get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Backend("document has no string 'id' field".to_string()))
}

#[async_trait]
impl Container for SqliteContainer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_item(&self, id: &str) -> Result<Value, StoreError> {
        let row = sqlx::query(&format!("SELECT document FROM {} WHERE id = ?", self.name))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let document: String = row.get("document");
                Ok(serde_json::from_str(&document)?)
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn create_item(&self, body: &Value) -> Result<(), StoreError> {
        let id = document_id(body)?;
        let document = serde_json::to_string(body)?;

        let result = sqlx::query(&format!("INSERT INTO {} (id, document) VALUES (?, ?)", self.name))
            .bind(id)
            .bind(&document)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::Conflict(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn replace_item(&self, id: &str, body: &Value) -> Result<(), StoreError> {
        if document_id(body)? != id {
            return Err(StoreError::Backend(format!(
                "document id does not match target id '{}'",
                id
            )));
        }
        let document = serde_json::to_string(body)?;

        let result = sqlx::query(&format!("UPDATE {} SET document = ? WHERE id = ?", self.name))
            .bind(&document)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", self.name))
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn query_items(&self, filter: Option<&Filter>) -> Result<Vec<Value>, StoreError> {
        let rows = match filter {
            Some(filter) => {
                if !is_identifier(filter.field) {
                    return Err(StoreError::Backend(format!(
                        "invalid filter field '{}'",
                        filter.field
                    )));
                }
                sqlx::query(&format!(
                    "SELECT document FROM {} WHERE json_extract(document, ?) = ? ORDER BY rowid",
                    self.name
                ))
                .bind(format!("$.{}", filter.field))
                .bind(&filter.value)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!("SELECT document FROM {} ORDER BY rowid", self.name))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let document: String = row.get("document");
            documents.push(serde_json::from_str(&document)?);
        }
        Ok(documents)
    }
}
