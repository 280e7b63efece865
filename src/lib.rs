/// Gestor: users and projects registry API
///
/// CRUD over two JSON document containers with cross-entity checks done at
/// the API layer: projects must point at an existing user, and only that
/// user may change them.

// Core configuration and setup
pub mod config;

// Entity schemas - User, Project and their partial-update payloads
pub mod models;

// Document store - containers, typed collections, bootstrap
pub mod store;

// HTTP API layer - REST endpoints for users and projects
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use api::{ApiError, AppState};
pub use models::{Project, ProjectPatch, User, UserPatch};
pub use server::{build_router, create_app, start_server};
pub use store::{Collection, Container, Database, StoreError};
