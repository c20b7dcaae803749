//! Enrollment ledger repository
//!
//! Uniqueness of (user, event) is enforced by `inscricoes_user_id_evento_id_key`,
//! so concurrent enrollments for one pair leave exactly one row.

use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::enrollment::{Enrollment, EnrollmentEventRow, EnrollmentWithEvent};

/// Unique constraint on (user_id, evento_id)
pub const ENROLLMENT_UNIQUE_KEY: &str = "inscricoes_user_id_evento_id_key";
/// Foreign key from enrollments to users
pub const ENROLLMENT_USER_FKEY: &str = "inscricoes_user_id_fkey";
/// Foreign key from enrollments to events
pub const ENROLLMENT_EVENT_FKEY: &str = "inscricoes_evento_id_fkey";

/// Enrollment repository for database operations
#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    /// Create a new enrollment repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an enrollment with status `pendente`
    ///
    /// A second enrollment for the same pair fails with a unique violation on
    /// [`ENROLLMENT_UNIQUE_KEY`]; a missing user or event with a foreign key
    /// violation.
    pub async fn enroll(&self, user_id: Uuid, evento_id: i64) -> DatabaseResult<Enrollment> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO inscricoes (user_id, evento_id, status)
            VALUES ($1, $2, 'pendente')
            RETURNING id, user_id, evento_id, status, created_at
            "#,
        )
        .bind(user_id)
        .bind(evento_id)
        .fetch_one(&self.pool)
        .await?;

        info!(%user_id, evento_id, "User enrolled in event");
        Ok(enrollment)
    }

    /// All enrollments of a user with their events, in insertion order
    pub async fn list_for_user(&self, user_id: Uuid) -> DatabaseResult<Vec<EnrollmentWithEvent>> {
        let rows = sqlx::query_as::<_, EnrollmentEventRow>(
            r#"
            SELECT i.id, i.user_id, i.evento_id, i.status, i.created_at,
                   e.nome AS evento_nome,
                   e.descricao AS evento_descricao,
                   e.data_inicio AS evento_data_inicio,
                   e.hora_inicio AS evento_hora_inicio,
                   e.hora_fim AS evento_hora_fim,
                   e.local AS evento_local,
                   e.status AS evento_status,
                   e.created_at AS evento_created_at
            FROM inscricoes i
            JOIN eventos e ON e.id = i.evento_id
            WHERE i.user_id = $1
            ORDER BY i.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EnrollmentWithEvent::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::event::NewEvent, repositories::EventRepository};
    use chrono::{NaiveDate, Utc};
    use common::{
        database::{DatabaseConfig, init_pool, run_migrations},
        error::DatabaseError,
        users::{NewUser, Profile, UserRepository},
    };

    async fn test_pool() -> Option<PgPool> {
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("Skipping: DATABASE_URL not set");
            return None;
        }

        let config = DatabaseConfig::from_env().expect("Failed to read database config");
        let pool = init_pool(&config).await.expect("Failed to connect");
        run_migrations(&pool).await.expect("Failed to migrate");
        Some(pool)
    }

    async fn seed(pool: &PgPool) -> (Uuid, i64) {
        let user = UserRepository::new(pool.clone())
            .create(&NewUser {
                email: format!("{}@example.com", Uuid::new_v4()),
                password_hash: "x".to_string(),
                profile: Profile {
                    nome: "Ana".to_string(),
                    data_nascimento: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                    profissao: "Enfermeira".to_string(),
                    telefone_contato: "44999990000".to_string(),
                    contato_emergencia: "Maria".to_string(),
                    telefone_contato_emergencia: "44999991111".to_string(),
                    cpf: "12345678901".to_string(),
                    estado_civil: "Solteira".to_string(),
                    tamanho_camiseta: "M".to_string(),
                },
            })
            .await
            .unwrap();

        let now = Utc::now();
        let event = EventRepository::new(pool.clone())
            .create(&NewEvent {
                nome: "Retiro".to_string(),
                descricao: "Retiro de jovens".to_string(),
                data_inicio: now.date_naive(),
                hora_inicio: now,
                hora_fim: now,
                local: "Catedral".to_string(),
            })
            .await
            .unwrap();

        (user.id, event.id)
    }

    #[tokio::test]
    async fn test_second_enrollment_is_a_unique_violation() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let (user_id, evento_id) = seed(&pool).await;
        let ledger = EnrollmentRepository::new(pool);

        let first = ledger.enroll(user_id, evento_id).await.unwrap();
        assert_eq!(first.status, "pendente");

        let err = ledger.enroll(user_id, evento_id).await.unwrap_err();
        assert!(err.is_unique_violation_of(ENROLLMENT_UNIQUE_KEY), "got {err:?}");

        let listed = ledger.list_for_user(user_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].evento.id, evento_id);
    }

    #[tokio::test]
    async fn test_concurrent_enrollments_leave_one_row() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let (user_id, evento_id) = seed(&pool).await;
        let ledger = EnrollmentRepository::new(pool);

        let attempts = (0..10).map(|_| {
            let ledger = ledger.clone();
            tokio::spawn(async move { ledger.enroll(user_id, evento_id).await })
        });

        let mut accepted = 0;
        for attempt in attempts.collect::<Vec<_>>() {
            match attempt.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(err) => assert!(err.is_unique_violation_of(ENROLLMENT_UNIQUE_KEY)),
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(ledger.list_for_user(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dangling_references_are_foreign_key_violations() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let (user_id, evento_id) = seed(&pool).await;
        let ledger = EnrollmentRepository::new(pool);

        let err = ledger.enroll(Uuid::new_v4(), evento_id).await.unwrap_err();
        assert!(err.is_foreign_key_violation_of(ENROLLMENT_USER_FKEY), "got {err:?}");

        let err = ledger.enroll(user_id, i64::MAX).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ForeignKeyViolation(ref c) if c == ENROLLMENT_EVENT_FKEY));
    }
}
