use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod cookies;
mod error;
mod models;
mod purge;
mod routes;

use common::{
    database::{DatabaseConfig, health_check, init_pool, run_migrations},
    session::SessionStore,
    users::UserRepository,
};
use tokio::net::TcpListener;

use crate::config::AuthSettings;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    pub session_store: SessionStore,
    pub settings: AuthSettings,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting authentication service");

    let settings = AuthSettings::load()?;

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

    let session_store = SessionStore::new(pool.clone(), settings.session_ttl());
    purge::spawn_session_purge(session_store.clone(), settings.session_purge_interval());

    let app_state = AppState {
        user_repository: UserRepository::new(pool),
        session_store,
        settings: settings.clone(),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Authentication service listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
