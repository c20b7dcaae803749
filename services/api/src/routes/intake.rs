//! Camp intake endpoints

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;

use crate::{
    error::{ApiError, ApiResult},
    intake::{IntakeReceipt, log_outcome, notify},
    models::intake::{
        CorpusChristiEntry, CorpusChristiForm, VolunteerEntry, VolunteerForm, WaitlistEntry,
        WaitlistForm,
    },
    state::AppState,
    templates,
    timezone::format_datetime_br,
};

/// Camper waitlist, Carnaval 2025
pub async fn submit_waitlist(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<WaitlistForm>, ApiError>,
) -> ApiResult<IntakeReceipt<WaitlistEntry>> {
    let form = form.validate().map_err(ApiError::BadRequest)?;
    let entry = state.intake_repository.insert_waitlist(&form).await?;

    let submitted_at = format_datetime_br(entry.created_at, state.utc_offset);
    let email_enviado = notify(
        &state.mailer,
        &entry.ficha.email,
        templates::waitlist_staff(entry.id, &entry.ficha, &submitted_at),
        templates::waitlist_confirmation(&entry.ficha, &submitted_at),
    )
    .await;
    log_outcome("ficha-espera", email_enviado);

    Ok(IntakeReceipt {
        inscricao: entry,
        email_enviado,
    })
}

/// Staff volunteers, Carnaval 2025
pub async fn submit_volunteer(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<VolunteerForm>, ApiError>,
) -> ApiResult<IntakeReceipt<VolunteerEntry>> {
    let form = form.validate().map_err(ApiError::BadRequest)?;
    let entry = state.intake_repository.insert_volunteer(&form).await?;

    let submitted_at = format_datetime_br(entry.created_at, state.utc_offset);
    let email_enviado = notify(
        &state.mailer,
        &entry.ficha.email,
        templates::volunteer_staff(entry.id, &entry.ficha, &submitted_at),
        templates::volunteer_confirmation(&entry.ficha, &submitted_at),
    )
    .await;
    log_outcome("servos", email_enviado);

    Ok(IntakeReceipt {
        inscricao: entry,
        email_enviado,
    })
}

/// Campers, Corpus Christi 2025
pub async fn submit_corpus_christi(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<CorpusChristiForm>, ApiError>,
) -> ApiResult<IntakeReceipt<CorpusChristiEntry>> {
    let form = form.validate().map_err(ApiError::BadRequest)?;
    let entry = state.intake_repository.insert_corpus_christi(&form).await?;

    let submitted_at = format_datetime_br(entry.created_at, state.utc_offset);
    let email_enviado = notify(
        &state.mailer,
        &entry.ficha.email,
        templates::corpus_christi_staff(entry.id, &entry.ficha, &submitted_at),
        templates::corpus_christi_confirmation(&entry.ficha, &submitted_at),
    )
    .await;
    log_outcome("corpus-christi", email_enviado);

    Ok(IntakeReceipt {
        inscricao: entry,
        email_enviado,
    })
}
