/// Configuration management for the Gestor API
///
/// Handles server binding and document store settings. Every value can be
/// overridden through a `GESTOR_*` environment variable for container deployments.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Document store configuration
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLx connection URL (e.g., "sqlite://data/gestor_proyectos.db")
    pub url: String,
    /// Upper bound for pooled connections
    pub max_connections: u32,
    /// Container holding user documents
    pub users_container: String,
    /// Container holding project documents
    pub projects_container: String,
}

impl Config {
    /// Reject settings that would break store bootstrap
    pub fn validate(&self) -> Result<()> {
        for name in [&self.database.users_container, &self.database.projects_container] {
            if !is_identifier(name) {
                bail!("Invalid container name '{}': use letters, digits and underscores", name);
            }
        }
        if self.database.users_container == self.database.projects_container {
            bail!("Users and projects must live in different containers");
        }
        if self.database.max_connections == 0 {
            bail!("database.max_connections must be at least 1");
        }
        Ok(())
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for k8s/container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env_or("GESTOR_HOST", "0.0.0.0"),
                port: env_or("GESTOR_PORT", "8000").parse().unwrap_or(8000),
            },
            database: DatabaseConfig {
                url: env_or("GESTOR_DATABASE_URL", "sqlite://data/gestor_proyectos.db"),
                max_connections: env_or("GESTOR_DB_MAX_CONNECTIONS", "5").parse().unwrap_or(5),
                users_container: env_or("GESTOR_USERS_CONTAINER", "users"),
                projects_container: env_or("GESTOR_PROJECTS_CONTAINER", "projects"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Container names end up in SQL as table names, so keep them to plain identifiers
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
