//! Background sweep of expired sessions

use std::time::Duration;

use chrono::Utc;
use common::session::SessionStore;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{info, warn};

/// Delete expired sessions now and then once every `period`
///
/// Failures are logged and retried on the next tick.
pub fn spawn_session_purge(session_store: SessionStore, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match session_store.purge_expired(Utc::now()).await {
                Ok(purged) => info!(purged, "Expired sessions removed"),
                Err(e) => warn!("Failed to purge expired sessions: {}", e),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::{
        database::{DatabaseConfig, init_pool, run_migrations},
        users::{NewUser, Profile, UserRepository, hash_password},
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn test_first_sweep_runs_immediately() {
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("Skipping: DATABASE_URL not set");
            return;
        }

        let config = DatabaseConfig::from_env().unwrap();
        let pool = init_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let user = UserRepository::new(pool.clone())
            .create(&NewUser {
                email: format!("{}@example.com", Uuid::new_v4()),
                password_hash: hash_password("12345678").unwrap(),
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

        let expired = SessionStore::new(pool.clone(), chrono::Duration::seconds(-1));
        let (_, session) = expired.create_session(user.id).await.unwrap();

        let sweep = spawn_session_purge(expired, Duration::from_secs(3600));

        let mut remaining = 1;
        for _ in 0..50 {
            remaining = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions WHERE id = $1")
                .bind(session.id)
                .fetch_one(&pool)
                .await
                .unwrap();
            if remaining == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        sweep.abort();

        assert_eq!(remaining, 0);
    }
}
