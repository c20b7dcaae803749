//! Community record repository

use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::community::{CommunityForm, CommunityRecord};

const COMMUNITY_COLUMNS: &str = "id, user_id, nome_comunidade, data_acampa1, nome_acampa2, \
     data_acampa2, data_envio, assessores, created_at, updated_at";

/// Community repository for database operations
#[derive(Clone)]
pub struct CommunityRepository {
    pool: PgPool,
}

impl CommunityRepository {
    /// Create a new community repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the community record of a user
    pub async fn find_by_user(&self, user_id: Uuid) -> DatabaseResult<Option<CommunityRecord>> {
        let record = sqlx::query_as::<_, CommunityRecord>(&format!(
            "SELECT {COMMUNITY_COLUMNS} FROM comunidade WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Overwrite the community record of a user, creating it if absent
    pub async fn upsert(
        &self,
        user_id: Uuid,
        form: &CommunityForm,
    ) -> DatabaseResult<CommunityRecord> {
        info!(%user_id, "Saving community record");

        let record = sqlx::query_as::<_, CommunityRecord>(&format!(
            r#"
            INSERT INTO comunidade (user_id, nome_comunidade, data_acampa1, nome_acampa2,
                data_acampa2, data_envio, assessores)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE
            SET nome_comunidade = EXCLUDED.nome_comunidade,
                data_acampa1 = EXCLUDED.data_acampa1,
                nome_acampa2 = EXCLUDED.nome_acampa2,
                data_acampa2 = EXCLUDED.data_acampa2,
                data_envio = EXCLUDED.data_envio,
                assessores = EXCLUDED.assessores,
                updated_at = NOW()
            RETURNING {COMMUNITY_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(&form.nome_comunidade)
        .bind(&form.data_acampa1)
        .bind(&form.nome_acampa2)
        .bind(&form.data_acampa2)
        .bind(&form.data_envio)
        .bind(&form.assessores)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
