//! Health record of the signed-in user

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::health::{HealthForm, SAUDE_USER_ID_KEY},
    state::AppState,
};

/// The record, or `null` if none was submitted yet
pub async fn get_health(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let saude = state.health_repository.find_by_user(auth_user.id).await?;

    Ok(Json(json!({
        "success": true,
        "saude": saude,
    })))
}

/// First submission; a second one is a conflict
pub async fn create_health(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    WithRejection(Json(form), _): WithRejection<Json<HealthForm>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let saude = state
        .health_repository
        .create(auth_user.id, &form.normalized())
        .await
        .map_err(|e| {
            if e.is_unique_violation_of(SAUDE_USER_ID_KEY) {
                ApiError::Conflict("Dados de saúde já cadastrados".to_string())
            } else {
                ApiError::Database(e)
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "saude": saude,
        })),
    ))
}

/// Overwrite the record, creating it if absent
pub async fn save_health(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    WithRejection(Json(form), _): WithRejection<Json<HealthForm>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let saude = state
        .health_repository
        .upsert(auth_user.id, &form.normalized())
        .await?;

    Ok(Json(json!({
        "success": true,
        "saude": saude,
    })))
}
