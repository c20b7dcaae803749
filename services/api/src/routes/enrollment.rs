//! Event enrollment endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::events::event_not_found;
use crate::{
    error::{ApiError, ApiResult},
    models::enrollment::{EnrollByBodyRequest, EnrollRequest, Enrollment, EnrollmentQuery},
    repositories::enrollment::{
        ENROLLMENT_EVENT_FKEY, ENROLLMENT_UNIQUE_KEY, ENROLLMENT_USER_FKEY,
    },
    state::AppState,
};

const INCOMPLETE: &str = "Dados incompletos";

fn user_not_found() -> ApiError {
    ApiError::NotFound("Usuário não encontrado".to_string())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Enroll a user in an event
///
/// The event is looked up first so that a missing event never reaches the
/// ledger; the unique constraint decides between concurrent duplicates.
async fn enroll(state: &AppState, evento_id: &str, user_id: &str) -> ApiResult<Enrollment> {
    let evento_id: i64 = evento_id.trim().parse().map_err(|_| event_not_found())?;
    let user_id = Uuid::parse_str(user_id).map_err(|_| user_not_found())?;

    state
        .event_repository
        .find_by_id(evento_id)
        .await?
        .ok_or_else(event_not_found)?;

    let inscricao = state
        .enrollment_repository
        .enroll(user_id, evento_id)
        .await
        .map_err(|e| {
            if e.is_unique_violation_of(ENROLLMENT_UNIQUE_KEY) {
                info!(%user_id, evento_id, "Duplicate enrollment rejected");
                ApiError::Conflict("Usuário já inscrito no evento.".to_string())
            } else if e.is_foreign_key_violation_of(ENROLLMENT_USER_FKEY) {
                user_not_found()
            } else if e.is_foreign_key_violation_of(ENROLLMENT_EVENT_FKEY) {
                event_not_found()
            } else {
                ApiError::Database(e)
            }
        })?;

    Ok(inscricao)
}

/// `POST /api/eventos/:id/inscrever`
pub async fn enroll_in_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<EnrollRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let user_id = present(payload.user_id.as_deref())
        .ok_or_else(|| ApiError::BadRequest(INCOMPLETE.to_string()))?;

    let inscricao = enroll(&state, &id, user_id).await?;

    Ok(Json(json!({
        "success": true,
        "inscricao": inscricao,
    })))
}

/// `POST /api/eventos/inscricao`, event identifier in the body
pub async fn enroll_by_body(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<EnrollByBodyRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let evento_id = payload
        .evento_id
        .as_ref()
        .map(|id| id.as_text())
        .filter(|id| !id.is_empty());

    let (Some(evento_id), Some(user_id)) = (evento_id, present(payload.user_id.as_deref())) else {
        return Err(ApiError::BadRequest(INCOMPLETE.to_string()));
    };

    let inscricao = enroll(&state, &evento_id, user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "inscricao": inscricao,
        })),
    ))
}

/// `GET /api/inscricoes?userId=`
pub async fn list_enrollments(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<EnrollmentQuery>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let user_id = present(query.user_id.as_deref())
        .ok_or_else(|| ApiError::BadRequest("userId não fornecido".to_string()))?;
    let user_id = Uuid::parse_str(user_id)
        .map_err(|_| ApiError::BadRequest("userId inválido".to_string()))?;

    let inscricoes = state.enrollment_repository.list_for_user(user_id).await?;

    Ok(Json(json!({
        "success": true,
        "inscricoes": inscricoes,
    })))
}
