//! Health record models

use chrono::{DateTime, Utc};
use common::validation::non_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Name of the unique constraint on `saude.user_id`
pub const SAUDE_USER_ID_KEY: &str = "saude_user_id_key";

/// Health record, one per user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub portador_doenca: bool,
    pub doencas: Option<String>,
    pub alergias: bool,
    pub alergias_detalhe: Option<String>,
    pub medicacao: bool,
    pub medicamentos: Option<String>,
    pub plano_saude: bool,
    pub operadora_plano: Option<String>,
    pub numero_inscricao_plano: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Health form; the four flags are required booleans
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthForm {
    pub portador_doenca: bool,
    #[serde(default)]
    pub doencas: Option<String>,
    pub alergias: bool,
    #[serde(default)]
    pub alergias_detalhe: Option<String>,
    pub medicacao: bool,
    #[serde(default)]
    pub medicamentos: Option<String>,
    pub plano_saude: bool,
    #[serde(default)]
    pub operadora_plano: Option<String>,
    #[serde(default)]
    pub numero_inscricao_plano: Option<String>,
}

impl HealthForm {
    /// Blank free-text answers are stored as NULL
    pub fn normalized(self) -> Self {
        Self {
            doencas: non_blank(self.doencas),
            alergias_detalhe: non_blank(self.alergias_detalhe),
            medicamentos: non_blank(self.medicamentos),
            operadora_plano: non_blank(self.operadora_plano),
            numero_inscricao_plano: non_blank(self.numero_inscricao_plano),
            ..self
        }
    }
}
