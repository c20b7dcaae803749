//! Community record of the signed-in user

use axum::{Extension, Json, extract::State, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::community::CommunityForm,
    state::AppState,
};

pub async fn get_community(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let comunidade = state
        .community_repository
        .find_by_user(auth_user.id)
        .await?;

    Ok(Json(json!({
        "success": true,
        "comunidade": comunidade,
    })))
}

pub async fn save_community(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    WithRejection(Json(form), _): WithRejection<Json<CommunityForm>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let form = form.validate().map_err(ApiError::BadRequest)?;
    let comunidade = state
        .community_repository
        .upsert(auth_user.id, &form)
        .await?;

    Ok(Json(json!({
        "success": true,
        "comunidade": comunidade,
    })))
}
