//! Handler functions for user profile and management API endpoints.
//!
//! These handlers validate their inputs and echo placeholder records; there
//! is no storage behind them yet.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::{Extension, Json};
use serde_json::{json, Value};
use validator::Validate;

use super::validation::{parse_user_id, UpdateUserPayload};
use crate::auth::models::Claims;
use crate::errors::ApiError;

pub async fn get_user(
    Path(id): Path<String>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_user_id(&id)?;
    Ok(Json(json!({
        "id": id,
        "requested_by": claims.id,
    })))
}

pub async fn update_user(
    Path(id): Path<String>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<UpdateUserPayload>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_user_id(&id)?;
    // Malformed bodies and unknown fields surface in the same error shape
    // as every other client-visible failure.
    let Json(mut payload) = payload.map_err(|err| ApiError::Validation(err.body_text()))?;
    payload.normalize();
    payload
        .validate()
        .map_err(|err| ApiError::Validation(err.to_string()))?;

    tracing::info!(user_id = id, updated_by = claims.id, "user update accepted");
    Ok(Json(json!({
        "id": id,
        "updated": payload,
        "updated_by": claims.id,
    })))
}
