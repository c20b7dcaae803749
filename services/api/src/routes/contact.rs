//! Public contact form

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde_json::json;
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    mailer::{Recipient, Relay},
    models::contact::ContactForm,
    state::AppState,
    templates::contact_staff,
    timezone::format_datetime_br,
};

/// Relay a contact message to staff; nothing is stored
pub async fn submit_contact(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<ContactForm>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    form.validate().map_err(ApiError::BadRequest)?;

    let submitted_at = format_datetime_br(Utc::now(), state.utc_offset);
    let content = contact_staff(&form, &submitted_at);

    if let Err(err) = state
        .mailer
        .send(Relay::Contact, Recipient::Staff, &content)
        .await
    {
        error!("Failed to relay contact message: {:#}", err);
        return Err(ApiError::BadGateway("Erro ao processar contato.".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Formulário enviado com sucesso!",
    })))
}
