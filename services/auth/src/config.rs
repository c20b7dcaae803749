//! Authentication service settings
//!
//! Read from `AUTH_*` environment variables through the `config` crate, with
//! defaults for every key.

use std::time::Duration as StdDuration;

use chrono::Duration;
use common::session::DEFAULT_SESSION_TTL_HOURS;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Authentication service settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub host: String,
    pub port: u16,
    /// Database-side session lifetime
    pub session_ttl_hours: i64,
    /// Cookie lifetime after login
    pub login_cookie_minutes: i64,
    /// Cookie lifetime after registration
    pub register_cookie_minutes: i64,
    /// Add the `Secure` attribute to the session cookie
    pub secure_cookies: bool,
    /// Period between sweeps of expired sessions
    pub session_purge_interval_minutes: u64,
}

/// One year, the longest accepted session or cookie lifetime
const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;
const MAX_COOKIE_MINUTES: i64 = MAX_SESSION_TTL_HOURS * 60;

impl AuthSettings {
    /// Load settings from the environment
    ///
    /// # Environment Variables
    /// - `AUTH_HOST` (default: "0.0.0.0")
    /// - `AUTH_PORT` (default: 3000)
    /// - `AUTH_SESSION_TTL_HOURS` (default: 24)
    /// - `AUTH_LOGIN_COOKIE_MINUTES` (default: 60)
    /// - `AUTH_REGISTER_COOKIE_MINUTES` (default: 30)
    /// - `AUTH_SECURE_COOKIES` (default: false)
    /// - `AUTH_SESSION_PURGE_INTERVAL_MINUTES` (default: 60)
    ///
    /// Lifetimes must lie between 1 and one year, the purge interval must be
    /// at least one minute.
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("session_ttl_hours", DEFAULT_SESSION_TTL_HOURS)?
            .set_default("login_cookie_minutes", 60)?
            .set_default("register_cookie_minutes", 30)?
            .set_default("secure_cookies", false)?
            .set_default("session_purge_interval_minutes", 60)?
            .add_source(Environment::with_prefix("AUTH").try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("AUTH_SESSION_TTL_HOURS", self.session_ttl_hours, MAX_SESSION_TTL_HOURS),
            ("AUTH_LOGIN_COOKIE_MINUTES", self.login_cookie_minutes, MAX_COOKIE_MINUTES),
            ("AUTH_REGISTER_COOKIE_MINUTES", self.register_cookie_minutes, MAX_COOKIE_MINUTES),
        ];
        for (key, value, max) in ranges {
            if !(1..=max).contains(&value) {
                return Err(ConfigError::Message(format!(
                    "{key} out of range: {value} (expected 1..={max})"
                )));
            }
        }

        if self.session_purge_interval_minutes == 0 {
            return Err(ConfigError::Message(
                "AUTH_SESSION_PURGE_INTERVAL_MINUTES must be positive".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::hours(self.session_ttl_hours)
    }

    pub fn session_purge_interval(&self) -> StdDuration {
        StdDuration::from_secs(self.session_purge_interval_minutes.saturating_mul(60))
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            login_cookie_minutes: 60,
            register_cookie_minutes: 30,
            secure_cookies: false,
            session_purge_interval_minutes: 60,
        }
    }
}
