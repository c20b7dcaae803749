//! Health record repository

use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::health::{HealthForm, HealthRecord};

const HEALTH_COLUMNS: &str = "id, user_id, portador_doenca, doencas, alergias, alergias_detalhe, \
     medicacao, medicamentos, plano_saude, operadora_plano, numero_inscricao_plano, \
     created_at, updated_at";

/// Health repository for database operations
#[derive(Clone)]
pub struct HealthRepository {
    pool: PgPool,
}

impl HealthRepository {
    /// Create a new health repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the health record of a user
    pub async fn find_by_user(&self, user_id: Uuid) -> DatabaseResult<Option<HealthRecord>> {
        let record = sqlx::query_as::<_, HealthRecord>(&format!(
            "SELECT {HEALTH_COLUMNS} FROM saude WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Create the health record of a user
    ///
    /// Fails with a unique violation on `saude_user_id_key` if one exists.
    pub async fn create(&self, user_id: Uuid, form: &HealthForm) -> DatabaseResult<HealthRecord> {
        info!(%user_id, "Creating health record");

        let record = sqlx::query_as::<_, HealthRecord>(&format!(
            r#"
            INSERT INTO saude (user_id, portador_doenca, doencas, alergias, alergias_detalhe,
                medicacao, medicamentos, plano_saude, operadora_plano, numero_inscricao_plano)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {HEALTH_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(form.portador_doenca)
        .bind(&form.doencas)
        .bind(form.alergias)
        .bind(&form.alergias_detalhe)
        .bind(form.medicacao)
        .bind(&form.medicamentos)
        .bind(form.plano_saude)
        .bind(&form.operadora_plano)
        .bind(&form.numero_inscricao_plano)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Overwrite the health record of a user, creating it if absent
    pub async fn upsert(&self, user_id: Uuid, form: &HealthForm) -> DatabaseResult<HealthRecord> {
        info!(%user_id, "Saving health record");

        let record = sqlx::query_as::<_, HealthRecord>(&format!(
            r#"
            INSERT INTO saude (user_id, portador_doenca, doencas, alergias, alergias_detalhe,
                medicacao, medicamentos, plano_saude, operadora_plano, numero_inscricao_plano)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id) DO UPDATE
            SET portador_doenca = EXCLUDED.portador_doenca,
                doencas = EXCLUDED.doencas,
                alergias = EXCLUDED.alergias,
                alergias_detalhe = EXCLUDED.alergias_detalhe,
                medicacao = EXCLUDED.medicacao,
                medicamentos = EXCLUDED.medicamentos,
                plano_saude = EXCLUDED.plano_saude,
                operadora_plano = EXCLUDED.operadora_plano,
                numero_inscricao_plano = EXCLUDED.numero_inscricao_plano,
                updated_at = NOW()
            RETURNING {HEALTH_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(form.portador_doenca)
        .bind(&form.doencas)
        .bind(form.alergias)
        .bind(&form.alergias_detalhe)
        .bind(form.medicacao)
        .bind(&form.medicamentos)
        .bind(form.plano_saude)
        .bind(&form.operadora_plano)
        .bind(&form.numero_inscricao_plano)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
