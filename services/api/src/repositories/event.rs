//! Event catalog repository

use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;

use crate::models::event::{Event, NewEvent};

const EVENT_COLUMNS: &str =
    "id, nome, descricao, data_inicio, hora_inicio, hora_fim, local, status, created_at";

/// Event repository for database operations
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, event: &NewEvent) -> DatabaseResult<Event> {
        info!("Creating event: {}", event.nome);

        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO eventos (nome, descricao, data_inicio, hora_inicio, hora_fim, local)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&event.nome)
        .bind(&event.descricao)
        .bind(event.data_inicio)
        .bind(event.hora_inicio)
        .bind(event.hora_fim)
        .bind(&event.local)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// List all events, oldest first
    pub async fn list(&self) -> DatabaseResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM eventos ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Find an event by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM eventos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }
}
