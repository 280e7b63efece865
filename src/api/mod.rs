/// HTTP API Layer
///
/// REST endpoints for users and projects. It handles:
/// - Payload extraction and validation
/// - Owner existence and ownership checks
/// - Mapping store outcomes to status codes

// Error taxonomy and its HTTP rendering
pub mod error;

// JSON body extractor with 400 rejections
pub mod extract;

// Injected store handles
pub mod state;

// User endpoints (GET/POST /users/, PUT/DELETE /users/{id})
pub mod users;

// Project endpoints, including /users/{id}/projects
pub mod projects;

use axum::Router;

pub use error::ApiError;
pub use projects::create_project_routes;
pub use state::AppState;
pub use users::create_user_routes;

/// All resource routes, still waiting for their state
///
/// Merges the user and project routers; `server::build_router` attaches
/// the `AppState`.
pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .merge(create_user_routes())
        .merge(create_project_routes())
}
