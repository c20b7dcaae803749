//! Staff roster of Corpus Christi campers

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    models::intake::RosterQuery,
    state::AppState,
};

/// `GET /api/acampa/campistas[?refresh=true]`
pub async fn list_campers(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<RosterQuery>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let roster = state
        .roster_cache
        .load(&state.intake_repository, query.refresh)
        .await?;

    Ok(Json(json!({
        "success": true,
        "campistas": roster.campistas,
        "ativos": roster.ativos,
        "fromCache": roster.from_cache,
    })))
}
