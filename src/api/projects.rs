/// Project management REST API endpoints
///
/// Every write first checks that the owning user exists. The check and the
/// write are separate store calls, so a user deleted in between can still
/// end up owning a freshly written project.

use crate::{
    api::{
        error::{
            conflict_as, not_found_as, ApiError, NOT_OWNER, PROJECT_EXISTS, PROJECT_NOT_FOUND,
            USER_MISSING, USER_NOT_FOUND,
        },
        extract::ApiJson,
        state::AppState,
    },
    models::{project::OWNER_FIELD, Project, ProjectPatch},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

/// Create project management routes
///
/// Sets up project CRUD plus the per-owner listing under /users/{user_id}.
/// All endpoints use the shared application state for store access.
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects/", get(list_projects).post(create_project))
        .route(
            "/projects/{project_id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/users/{user_id}/projects", get(list_projects_by_owner))
}

/// List all projects
///
/// GET /projects/
async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.projects.list().await?;
    tracing::debug!("📋 Listed {} projects", projects.len());
    Ok(Json(projects))
}

/// Create a project for an existing user
///
/// POST /projects/
/// Body: { "id": "p1", "name": "API", "description": "...", "owner_id": "u1",
///         "created_at": "2024-10-31T19:00:00Z" }
async fn create_project(
    State(state): State<AppState>,
    ApiJson(project): ApiJson<Project>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    project.validate()?;

    // Owner first: an unknown owner wins over a duplicate project id
    if !state.users.exists(&project.owner_id).await? {
        tracing::warn!(
            "❌ Project {} references unknown user {}",
            project.id,
            project.owner_id
        );
        return Err(ApiError::NotFound(USER_MISSING.to_string()));
    }

    state
        .projects
        .create(&project)
        .await
        .map_err(conflict_as(PROJECT_EXISTS))?;

    tracing::info!(
        "📁 Created project: {} ({}) owned by {}",
        project.id,
        project.name,
        project.owner_id
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// List the projects owned by one user
///
/// GET /users/{user_id}/projects
async fn list_projects_by_owner(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Project>>, ApiError> {
    if !state.users.exists(&user_id).await? {
        return Err(ApiError::NotFound(USER_MISSING.to_string()));
    }

    let projects = state.projects.find_by(OWNER_FIELD, &user_id).await?;
    tracing::debug!("📋 User {} owns {} projects", user_id, projects.len());
    Ok(Json(projects))
}

/// Get a project by id
///
/// GET /projects/{project_id}
async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .projects
        .get(&project_id)
        .await
        .map_err(not_found_as(PROJECT_NOT_FOUND))?;
    Ok(Json(project))
}

/// Update the fields present in the body
///
/// PUT /projects/{project_id}
/// Body: { "owner_id": "u1", ... } where `owner_id` must be the current owner
async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ApiJson(patch): ApiJson<ProjectPatch>,
) -> Result<Json<Project>, ApiError> {
    let acting_owner = patch.validate(&project_id)?.to_string();

    let mut project = state
        .projects
        .get(&project_id)
        .await
        .map_err(not_found_as(PROJECT_NOT_FOUND))?;

    if !state.users.exists(&acting_owner).await? {
        return Err(ApiError::NotFound(USER_NOT_FOUND.to_string()));
    }

    if acting_owner != project.owner_id {
        tracing::warn!(
            "🚫 User {} tried to modify project {} owned by {}",
            acting_owner,
            project_id,
            project.owner_id
        );
        return Err(ApiError::Forbidden(NOT_OWNER.to_string()));
    }

    patch.apply(&mut project);

    state
        .projects
        .replace(&project_id, &project)
        .await
        .map_err(not_found_as(PROJECT_NOT_FOUND))?;

    tracing::info!("✏️ Updated project: {}", project_id);
    Ok(Json(project))
}

/// Delete a project
///
/// DELETE /projects/{project_id}
async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .projects
        .delete(&project_id)
        .await
        .map_err(not_found_as(PROJECT_NOT_FOUND))?;

    tracing::info!("🗑️ Deleted project: {}", project_id);
    Ok(StatusCode::NO_CONTENT)
}
