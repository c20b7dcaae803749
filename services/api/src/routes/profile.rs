//! Profile of the signed-in user

use axum::{Extension, Json, extract::State, response::IntoResponse};
use axum_extra::extract::WithRejection;
use common::users::USERS_EMAIL_KEY;
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::profile::ProfileForm,
    state::AppState,
};

fn user_not_found() -> ApiError {
    ApiError::NotFound("Usuário não encontrado".to_string())
}

/// Current user's profile
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .find_by_id(auth_user.id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(json!({
        "success": true,
        "user": user,
    })))
}

/// Update the current user's profile
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    WithRejection(Json(form), _): WithRejection<Json<ProfileForm>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let update = form.validate().map_err(ApiError::BadRequest)?;

    let user = state
        .user_repository
        .update_profile(auth_user.id, &update)
        .await
        .map_err(|e| {
            if e.is_unique_violation_of(USERS_EMAIL_KEY) {
                ApiError::Conflict("Email já está em uso".to_string())
            } else {
                ApiError::Database(e)
            }
        })?
        .ok_or_else(user_not_found)?;

    info!(user_id = %user.id, "Profile updated");

    Ok(Json(json!({
        "success": true,
        "user": user,
    })))
}
