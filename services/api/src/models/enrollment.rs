//! Enrollment ledger models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::event::Event;

/// Enrollment entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    pub user_id: Uuid,
    pub evento_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Enrollment together with its event
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentWithEvent {
    #[serde(flatten)]
    pub inscricao: Enrollment,
    pub evento: Event,
}

/// Joined row; event columns carry an `evento_` prefix
#[derive(Debug, FromRow)]
pub struct EnrollmentEventRow {
    pub id: i64,
    pub user_id: Uuid,
    pub evento_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub evento_nome: String,
    pub evento_descricao: String,
    pub evento_data_inicio: NaiveDate,
    pub evento_hora_inicio: DateTime<Utc>,
    pub evento_hora_fim: DateTime<Utc>,
    pub evento_local: String,
    pub evento_status: String,
    pub evento_created_at: DateTime<Utc>,
}

impl From<EnrollmentEventRow> for EnrollmentWithEvent {
    fn from(row: EnrollmentEventRow) -> Self {
        Self {
            inscricao: Enrollment {
                id: row.id,
                user_id: row.user_id,
                evento_id: row.evento_id,
                status: row.status,
                created_at: row.created_at,
            },
            evento: Event {
                id: row.evento_id,
                nome: row.evento_nome,
                descricao: row.evento_descricao,
                data_inicio: row.evento_data_inicio,
                hora_inicio: row.evento_hora_inicio,
                hora_fim: row.evento_hora_fim,
                local: row.evento_local,
                status: row.evento_status,
                created_at: row.evento_created_at,
            },
        }
    }
}

/// An identifier sent either as a JSON number or as a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdParam {
    Number(i64),
    Text(String),
}

impl IdParam {
    /// The textual form, empty when blank
    pub fn as_text(&self) -> String {
        match self {
            IdParam::Number(n) => n.to_string(),
            IdParam::Text(s) => s.trim().to_string(),
        }
    }
}

/// Body of `POST /api/eventos/:id/inscrever`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnrollRequest {
    pub user_id: Option<String>,
}

/// Body of `POST /api/eventos/inscricao`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnrollByBodyRequest {
    pub evento_id: Option<IdParam>,
    pub user_id: Option<String>,
}

/// Query of `GET /api/inscricoes`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentQuery {
    pub user_id: Option<String>,
}
