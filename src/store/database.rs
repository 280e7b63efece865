/// Document database bootstrap
///
/// Opens the SQLite connection pool and makes sure both containers exist.
/// Pools for `sqlite::memory:` are pinned to one long-lived connection so
/// every query sees the same in-memory database.

use crate::config::DatabaseConfig;
use crate::store::{container::Container, sqlite::SqliteContainer};
use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{path::Path, str::FromStr, sync::Arc};

/// Connection pool plus the two containers the API works with
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    pub users: Arc<dyn Container>,
    pub projects: Arc<dyn Container>,
}

impl Database {
    /// Create the database if missing, then create or open both containers
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| anyhow::anyhow!("Invalid database url '{}': {}", config.url, e))?
            .create_if_missing(true);

        let in_memory = is_memory_url(&config.url);
        if !in_memory {
            ensure_parent_dir(options.get_filename())?;
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        tracing::info!("🗄️ Opening document database: {}", config.url);
        let pool = pool_options.connect_with(options).await?;

        let users = SqliteContainer::open(pool.clone(), &config.users_container).await?;
        let projects = SqliteContainer::open(pool.clone(), &config.projects_container).await?;

        tracing::info!(
            "✅ Containers ready: {}, {}",
            config.users_container,
            config.projects_container
        );

        Ok(Self {
            pool,
            users: Arc::new(users),
            projects: Arc::new(projects),
        })
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("🔒 Document database closed");
    }
}

fn is_memory_url(url: &str) -> bool {
    url == "sqlite::memory:" || url.contains("mode=memory")
}

fn ensure_parent_dir(file: &Path) -> Result<()> {
    if let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            anyhow::anyhow!("Failed to create data directory '{}': {}", dir.display(), e)
        })?;
    }
    Ok(())
}
