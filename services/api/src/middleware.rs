//! Session cookie authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use common::session::SESSION_COOKIE;
use tracing::debug;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Authenticated user information
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Authentication middleware
///
/// Resolves the `auth-session` cookie to a live session and stores the
/// [`AuthUser`] in the request extensions. Anything else is a 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(ApiError::Unauthorized)?;

    let session = state
        .session_store
        .validate_session(&token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    debug!(user_id = %session.user_id, "Request authenticated");

    req.extensions_mut().insert(AuthUser {
        id: session.user_id,
    });

    Ok(next.run(req).await)
}
