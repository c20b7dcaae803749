//! Event catalog endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::event::CreateEventRequest,
    state::AppState,
};

pub(super) fn event_not_found() -> ApiError {
    ApiError::NotFound("Evento não encontrado".to_string())
}

/// All events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let eventos = state.event_repository.list().await?;

    Ok(Json(json!({
        "success": true,
        "eventos": eventos,
    })))
}

/// Create an event; times are read in the configured offset
pub async fn create_event(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateEventRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let new_event = payload
        .validate(state.utc_offset)
        .map_err(ApiError::BadRequest)?;

    let evento = state.event_repository.create(&new_event).await?;
    info!(evento_id = evento.id, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "evento": evento,
        })),
    ))
}

/// One event; non-numeric identifiers are simply not found
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: i64 = id.trim().parse().map_err(|_| event_not_found())?;

    let evento = state
        .event_repository
        .find_by_id(id)
        .await?
        .ok_or_else(event_not_found)?;

    Ok(Json(json!({
        "success": true,
        "evento": evento,
    })))
}
