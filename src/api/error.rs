/// HTTP error taxonomy
///
/// Every handler failure ends up as one of these variants and is rendered as
/// `{"detail": "<message>"}` with the matching status code.

use crate::{models::ValidationError, store::StoreError};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

pub const USER_EXISTS: &str = "User with this ID already exists.";
pub const USER_MISSING: &str = "User with this ID does not exist";
pub const USER_NOT_FOUND: &str = "User not found";
pub const PROJECT_EXISTS: &str = "Project with this ID already exists.";
pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const NOT_OWNER: &str = "User is not the owner of this project and cannot modify it";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or rule-breaking request body
    #[error("{0}")]
    Validation(String),

    /// Create with an id that is already taken
    #[error("{0}")]
    Conflict(String),

    /// Referenced record is absent
    #[error("{0}")]
    NotFound(String),

    /// Caller does not own the record; rendered as 404
    #[error("{0}")]
    Forbidden(String),

    /// Any other store failure, message passed through untouched
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) | ApiError::Upstream(_) => {
                StatusCode::BAD_REQUEST
            }
            // Non-owners get the same status as a missing owner
            ApiError::NotFound(_) | ApiError::Forbidden(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Map a store miss to `NotFound(message)`, anything else through `From`
pub fn not_found_as(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |e| match e {
        StoreError::NotFound(_) => ApiError::NotFound(message.to_string()),
        other => other.into(),
    }
}

/// Map a duplicate id to `Conflict(message)`, anything else through `From`
pub fn conflict_as(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |e| match e {
        StoreError::Conflict(_) => ApiError::Conflict(message.to_string()),
        other => other.into(),
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ApiError::NotFound(format!("'{}' not found", id)),
            StoreError::Conflict(id) => ApiError::Conflict(format!("'{}' already exists", id)),
            StoreError::Backend(message) => ApiError::Upstream(message),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Upstream(message) = &self {
            tracing::error!("❌ Store failure: {}", message);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Upstream("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Forbidden("x".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn backend_message_is_kept_verbatim() {
        let err = ApiError::from(StoreError::Backend("disk I/O error".into()));
        assert!(matches!(&err, ApiError::Upstream(m) if m == "disk I/O error"));
    }

    #[test]
    fn mappers_only_rewrite_their_kind() {
        let missing = not_found_as(USER_MISSING)(StoreError::NotFound("u1".into()));
        assert!(matches!(&missing, ApiError::NotFound(m) if m == USER_MISSING));

        let passthrough = not_found_as(USER_MISSING)(StoreError::Backend("boom".into()));
        assert!(matches!(passthrough, ApiError::Upstream(_)));

        let taken = conflict_as(PROJECT_EXISTS)(StoreError::Conflict("p1".into()));
        assert!(matches!(&taken, ApiError::Conflict(m) if m == PROJECT_EXISTS));
    }
}
