/// Request body extraction
///
/// Same as `axum::Json`, but a bad body becomes `ApiError::Validation` (400)
/// rather than axum's plain-text 415/422 rejections.

use crate::api::error::ApiError;
use axum::extract::FromRequest;

/// JSON request body that rejects with `ApiError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
