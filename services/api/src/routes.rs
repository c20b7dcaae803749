//! API service routes

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{middleware::auth_middleware, state::AppState};

mod community;
mod contact;
mod enrollment;
mod events;
mod health;
mod intake;
mod profile;
mod roster;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/api/perfil",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route(
            "/api/saude",
            get(health::get_health)
                .post(health::create_health)
                .put(health::save_health),
        )
        .route(
            "/api/comunidade",
            get(community::get_community).put(community::save_community),
        )
        .route("/api/acampa/campistas", get(roster::list_campers))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/eventos",
            get(events::list_events).post(events::create_event),
        )
        .route("/api/eventos/inscricao", post(enrollment::enroll_by_body))
        .route("/api/eventos/:id", get(events::get_event))
        .route("/api/eventos/:id/inscrever", post(enrollment::enroll_in_event))
        .route("/api/inscricoes", get(enrollment::list_enrollments))
        .route("/api/acampa/ficha-espera", post(intake::submit_waitlist))
        .route("/api/Acampa1FichaDeEspera", post(intake::submit_waitlist))
        .route("/api/acampa/servos", post(intake::submit_volunteer))
        .route(
            "/api/Acampa1ServosCarnaval2025",
            post(intake::submit_volunteer),
        )
        .route(
            "/api/acampa/corpus-christi",
            post(intake::submit_corpus_christi),
        )
        .route("/api/contato", post(contact::submit_contact))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "api-service"
    }))
}
