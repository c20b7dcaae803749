use anyhow::Result;
use chrono::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod intake;
mod mailer;
mod middleware;
mod models;
mod repositories;
mod roster;
mod routes;
mod state;
mod templates;
mod timezone;

use common::{
    cache::{RedisConfig, RedisPool},
    database::{DatabaseConfig, health_check, init_pool, run_migrations},
    session::{DEFAULT_SESSION_TTL_HOURS, SessionStore},
    users::UserRepository,
};
use tokio::net::TcpListener;

use crate::{
    config::ApiSettings,
    mailer::{MailConfig, Mailer},
    repositories::{
        CommunityRepository, EnrollmentRepository, EventRepository, HealthRepository,
        IntakeRepository,
    },
    roster::RosterCache,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting API service");

    let settings = ApiSettings::load()?;
    let utc_offset = settings.utc_offset()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    run_migrations(&pool).await?;

    let redis = RedisPool::new(&RedisConfig::from_env()?)?;
    if let Err(e) = redis.health_check().await {
        warn!("Redis unreachable, roster will be read from the database: {:#}", e);
    }

    let mail_config = MailConfig::from_env();
    for (relay, smtp) in [("intake", &mail_config.intake), ("contact", &mail_config.contact)] {
        if !smtp.is_configured() {
            warn!(relay, host = %smtp.host, "SMTP relay not configured, emails will be skipped");
        }
    }

    let app_state = AppState {
        user_repository: UserRepository::new(pool.clone()),
        session_store: SessionStore::new(pool.clone(), Duration::hours(DEFAULT_SESSION_TTL_HOURS)),
        event_repository: EventRepository::new(pool.clone()),
        enrollment_repository: EnrollmentRepository::new(pool.clone()),
        health_repository: HealthRepository::new(pool.clone()),
        community_repository: CommunityRepository::new(pool.clone()),
        intake_repository: IntakeRepository::new(pool),
        roster_cache: RosterCache::new(redis, settings.roster_cache_ttl_secs),
        mailer: Mailer::new(mail_config),
        utc_offset,
    };

    info!("API service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("API service listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
