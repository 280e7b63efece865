/// Shared handler state
///
/// Holds the typed collections every handler reads and writes. Created from
/// the `Database` opened at startup and cloned into each request.

use crate::{
    models::{Project, User},
    store::{Collection, Container, Database},
};
use std::sync::Arc;

/// Store handles injected into every handler
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Users container, keyed by user id
    pub users: Collection<User>,
    /// Projects container, keyed by project id and filterable by owner
    pub projects: Collection<Project>,
}

impl AppState {
    /// Wrap two containers in typed collections
    ///
    /// Any `Container` implementation works, which is how tests swap in
    /// an in-memory SQLite store.
    pub fn new(users: Arc<dyn Container>, projects: Arc<dyn Container>) -> Self {
        Self {
            users: Collection::new(users),
            projects: Collection::new(projects),
        }
    }
}

impl From<&Database> for AppState {
    fn from(db: &Database) -> Self {
        Self::new(Arc::clone(&db.users), Arc::clone(&db.projects))
    }
}
