//! Event catalog models

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use common::validation::{parse_date, parse_time, require_fields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::timezone::compose;

/// Event entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub hora_inicio: DateTime<Utc>,
    pub hora_fim: DateTime<Utc>,
    pub local: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Event creation form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub nome: String,
    pub descricao: String,
    /// `YYYY-MM-DD`
    pub data_inicio: String,
    /// `HH:MM`
    pub hora_inicio: String,
    /// `HH:MM`
    pub hora_fim: String,
    pub local: String,
}

/// Validated event, times resolved to instants
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub nome: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub hora_inicio: DateTime<Utc>,
    pub hora_fim: DateTime<Utc>,
    pub local: String,
}

impl CreateEventRequest {
    /// Validate the form, reading times as wall-clock times in `offset`
    pub fn validate(&self, offset: FixedOffset) -> Result<NewEvent, String> {
        require_fields(&[
            ("nome", self.nome.as_str()),
            ("descricao", self.descricao.as_str()),
            ("dataInicio", self.data_inicio.as_str()),
            ("horaInicio", self.hora_inicio.as_str()),
            ("horaFim", self.hora_fim.as_str()),
            ("local", self.local.as_str()),
        ])?;

        let data_inicio = parse_date("dataInicio", &self.data_inicio)?;
        let start = parse_time("horaInicio", &self.hora_inicio)?;
        let end = parse_time("horaFim", &self.hora_fim)?;

        let invalid = || "Horário inválido para a data informada".to_string();
        let hora_inicio = compose(data_inicio, start, offset).ok_or_else(invalid)?;
        let hora_fim = compose(data_inicio, end, offset).ok_or_else(invalid)?;

        if hora_fim < hora_inicio {
            return Err("horaFim não pode ser anterior a horaInicio".to_string());
        }

        Ok(NewEvent {
            nome: self.nome.trim().to_string(),
            descricao: self.descricao.trim().to_string(),
            data_inicio,
            hora_inicio,
            hora_fim,
            local: self.local.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateEventRequest {
        CreateEventRequest {
            nome: "Retiro".to_string(),
            descricao: "Retiro de jovens".to_string(),
            data_inicio: "2025-03-01".to_string(),
            hora_inicio: "08:00".to_string(),
            hora_fim: "17:30".to_string(),
            local: "Catedral".to_string(),
        }
    }

    fn sao_paulo() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_times_are_composed_in_offset() {
        let event = request().validate(sao_paulo()).unwrap();
        assert_eq!(event.hora_inicio.to_rfc3339(), "2025-03-01T11:00:00+00:00");
        assert_eq!(event.hora_fim.to_rfc3339(), "2025-03-01T20:30:00+00:00");
        assert_eq!(event.data_inicio, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let form = CreateEventRequest {
            hora_fim: "07:59".to_string(),
            ..request()
        };
        assert!(form.validate(sao_paulo()).is_err());
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        let missing = CreateEventRequest {
            local: " ".to_string(),
            ..request()
        };
        assert_eq!(
            missing.validate(sao_paulo()),
            Err("missing required fields".to_string())
        );

        let malformed = CreateEventRequest {
            hora_inicio: "8h".to_string(),
            ..request()
        };
        assert!(malformed.validate(sao_paulo()).is_err());
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let new_event = request().validate(sao_paulo()).unwrap();
        let event = Event {
            id: 1,
            nome: new_event.nome,
            descricao: new_event.descricao,
            data_inicio: new_event.data_inicio,
            hora_inicio: new_event.hora_inicio,
            hora_fim: new_event.hora_fim,
            local: new_event.local,
            status: "ativo".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["dataInicio"], "2025-03-01");
        assert!(json.get("horaInicio").is_some());
        assert_eq!(json["status"], "ativo");
    }
}
