/// Document store layer
///
/// Keyed JSON containers with point read/create/replace/delete and a
/// bound equality query, plus the typed collections handlers use:
/// - `Container` contract and `StoreError`
/// - SQLite implementation with sqlx
/// - Database bootstrap (create if not exists)

// Container contract shared by every backend
pub mod container;

// SQLite-backed containers
pub mod sqlite;

// Pool setup and container bootstrap
pub mod database;

// Typed record access on top of a container
pub mod collection;

pub use collection::Collection;
pub use container::{Container, Filter, StoreError};
pub use database::Database;
pub use sqlite::SqliteContainer;
