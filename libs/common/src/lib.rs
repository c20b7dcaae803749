//! Common library for the Mais Vida services
//!
//! This crate provides shared functionality used across the services:
//! database connectivity and migrations, the database error taxonomy, the
//! Redis cache, the credential store, the session manager and request
//! validation helpers.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     println!("Database health check: {}", health_check(&pool).await?);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod database;
pub mod error;
pub mod session;
pub mod users;
pub mod validation;
