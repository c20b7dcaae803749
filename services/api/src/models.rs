//! API models for request and response payloads

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

pub mod community;
pub mod contact;
pub mod enrollment;
pub mod event;
pub mod health;
pub mod intake;
pub mod profile;

/// Deserialize a date sent either as `YYYY-MM-DD` or as an ISO datetime
pub fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    common::validation::parse_date("date", &value).map_err(serde::de::Error::custom)
}

/// Trim surrounding whitespace in place
pub(crate) fn tidy(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}
