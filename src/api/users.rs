/// User management REST API endpoints
///
/// List, create, partial update and delete over the users container.
/// Deleting a user leaves that user's projects in place.

use crate::{
    api::{
        error::{conflict_as, not_found_as, ApiError, USER_EXISTS, USER_MISSING},
        extract::ApiJson,
        state::AppState,
    },
    models::{User, UserPatch},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};

/// Create user management routes
///
/// Sets up the REST API endpoints for user CRUD operations.
/// All endpoints use the shared application state for store access.
pub fn create_user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users/{user_id}", put(update_user).delete(delete_user))
}

/// List all users
///
/// GET /users/
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    tracing::debug!("📋 Listed {} users", users.len());
    Ok(Json(users))
}

/// Create a new user
///
/// POST /users/
/// Body: { "id": "u1", "name": "Juan", "email": "juan@example.com", "age": 25 }
async fn create_user(
    State(state): State<AppState>,
    ApiJson(user): ApiJson<User>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    user.validate()?;

    state.users.create(&user).await.map_err(|e| {
        tracing::warn!("❌ User create rejected for {}: {}", user.id, e);
        conflict_as(USER_EXISTS)(e)
    })?;

    tracing::info!("👤 Created user: {} ({})", user.id, user.name);
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update the fields present in the body
///
/// PUT /users/{user_id}
/// Body: any subset of { "name", "email", "age" }
async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(patch): ApiJson<UserPatch>,
) -> Result<Json<User>, ApiError> {
    patch.validate(&user_id)?;

    let mut user = state
        .users
        .get(&user_id)
        .await
        .map_err(not_found_as(USER_MISSING))?;

    patch.apply(&mut user);

    state
        .users
        .replace(&user_id, &user)
        .await
        .map_err(not_found_as(USER_MISSING))?;

    tracing::info!("✏️ Updated user: {}", user_id);
    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /users/{user_id}
async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .users
        .delete(&user_id)
        .await
        .map_err(not_found_as(USER_MISSING))?;

    tracing::info!("🗑️ Deleted user: {} (projects are kept)", user_id);
    Ok(StatusCode::NO_CONTENT)
}
