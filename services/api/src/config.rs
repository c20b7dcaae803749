//! API service settings
//!
//! Read from `API_*` environment variables through the `config` crate.
//! SMTP relays are configured separately, see [`crate::mailer::MailConfig`].

use chrono::FixedOffset;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// API service settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    /// Offset used to compose event times and stamp emails, in minutes east of UTC
    pub utc_offset_minutes: i32,
    /// Lifetime of the cached camper roster
    pub roster_cache_ttl_secs: u64,
}

impl ApiSettings {
    /// Load settings from the environment
    ///
    /// # Environment Variables
    /// - `API_HOST` (default: "0.0.0.0")
    /// - `API_PORT` (default: 3001)
    /// - `API_UTC_OFFSET_MINUTES` (default: -180, America/Sao_Paulo)
    /// - `API_ROSTER_CACHE_TTL_SECS` (default: 1800)
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001)?
            .set_default("utc_offset_minutes", -180)?
            .set_default("roster_cache_ttl_secs", 1800)?
            .add_source(Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.utc_offset()?;
        Ok(settings)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured offset; fails outside of +/- 24h
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "API_UTC_OFFSET_MINUTES out of range: {}",
                    self.utc_offset_minutes
                ))
            })
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            utc_offset_minutes: -180,
            roster_cache_ttl_secs: 1800,
        }
    }
}
