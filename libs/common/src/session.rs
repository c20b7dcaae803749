//! Session management backed by the `sessions` table
//!
//! Tokens are 32 random bytes, hex encoded, handed to the browser in the
//! `auth-session` cookie. Only the SHA-256 digest of a token is persisted, so
//! a leaked table cannot be replayed as cookies.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::{FromRow, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::DatabaseResult;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "auth-session";

/// Default database-side session lifetime
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Session entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(skip_serializing, default)]
    pub token_hash: String,
    pub valid: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// A session authenticates iff it was not revoked and has not expired
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.valid && self.expires_at > now
    }
}

/// Generate a new opaque session token
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hash a token for storage
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Session manager for issuing, validating and revoking sessions
#[derive(Clone)]
pub struct SessionStore {
    pool: PgPool,
    ttl: Duration,
}

impl SessionStore {
    /// Create a new session store; `ttl` is the database-side lifetime
    pub fn new(pool: PgPool, ttl: Duration) -> Self {
        Self { pool, ttl }
    }

    /// Create a new session for a user, returning the plain token
    pub async fn create_session(&self, user_id: Uuid) -> DatabaseResult<(String, Session)> {
        info!("Creating session for user: {}", user_id);

        let token = generate_token();
        let expires_at = Utc::now() + self.ttl;

        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id, token_hash, valid, expires_at)
            VALUES ($1, $2, TRUE, $3)
            RETURNING id, user_id, token_hash, valid, expires_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(hash_token(&token))
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok((token, session))
    }

    /// Resolve a token to its session
    ///
    /// Unknown, revoked and expired tokens all come back as `None`.
    pub async fn validate_session(&self, token: &str) -> DatabaseResult<Option<Session>> {
        if token.is_empty() {
            return Ok(None);
        }

        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, token_hash, valid, expires_at, created_at
            FROM sessions
            WHERE token_hash = $1
            "#,
        )
        .bind(hash_token(token))
        .fetch_optional(&self.pool)
        .await?;

        let session = session.filter(|s| s.is_active_at(Utc::now()));
        if session.is_none() {
            debug!("Rejected unknown, revoked or expired session token");
        }

        Ok(session)
    }

    /// Revoke a session; returns whether a live session was revoked
    pub async fn revoke_session(&self, token: &str) -> DatabaseResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET valid = FALSE
            WHERE token_hash = $1 AND valid
            "#,
        )
        .bind(hash_token(token))
        .execute(&self.pool)
        .await?;

        let revoked = result.rows_affected() > 0;
        if revoked {
            info!("Session revoked");
        }
        Ok(revoked)
    }

    /// Delete sessions that expired before `cutoff`
    pub async fn purge_expired(&self, cutoff: DateTime<Utc>) -> DatabaseResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
