//! Community record models

use chrono::{DateTime, Utc};
use common::validation::non_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::tidy;

/// Community record, one per user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub nome_comunidade: String,
    pub data_acampa1: Option<String>,
    pub nome_acampa2: Option<String>,
    pub data_acampa2: Option<String>,
    pub data_envio: Option<String>,
    pub assessores: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Community form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommunityForm {
    pub nome_comunidade: String,
    pub data_acampa1: Option<String>,
    pub nome_acampa2: Option<String>,
    pub data_acampa2: Option<String>,
    pub data_envio: Option<String>,
    pub assessores: String,
}

impl CommunityForm {
    pub fn validate(mut self) -> Result<Self, String> {
        tidy(&mut self.nome_comunidade);
        tidy(&mut self.assessores);

        if self.nome_comunidade.is_empty() {
            return Err("Nome da comunidade é obrigatório".to_string());
        }
        if self.assessores.is_empty() {
            return Err("Assessores é obrigatório".to_string());
        }

        Ok(Self {
            data_acampa1: non_blank(self.data_acampa1),
            nome_acampa2: non_blank(self.nome_acampa2),
            data_acampa2: non_blank(self.data_acampa2),
            data_envio: non_blank(self.data_envio),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let form = CommunityForm {
            nome_comunidade: "Shalom".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Assessores é obrigatório");

        let form = CommunityForm {
            assessores: "João e Maria".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Nome da comunidade é obrigatório");
    }

    #[test]
    fn test_optional_fields_are_normalized() {
        let form: CommunityForm = serde_json::from_str(
            r#"{"nomeComunidade": " Shalom ", "assessores": "João", "dataAcampa1": "", "nomeAcampa2": "Carnaval"}"#,
        )
        .unwrap();

        let form = form.validate().unwrap();
        assert_eq!(form.nome_comunidade, "Shalom");
        assert_eq!(form.data_acampa1, None);
        assert_eq!(form.nome_acampa2.as_deref(), Some("Carnaval"));
    }
}
