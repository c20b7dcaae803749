//! Input validation utilities
//!
//! Validators return `Err` with a client-facing message. Payload-specific
//! rules live next to the payload types in each service.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Message returned when any required field is blank
pub const MISSING_FIELDS: &str = "missing required fields";

/// Reject the payload if any of the named fields is blank
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), String> {
    if fields.iter().any(|(_, value)| value.trim().is_empty()) {
        return Err(MISSING_FIELDS.to_string());
    }

    Ok(())
}

/// Reject a field shorter than `min` characters (after trimming)
pub fn min_length(field: &str, value: &str, min: usize) -> Result<(), String> {
    if value.trim().chars().count() < min {
        return Err(format!("{} must be at least {} characters long", field, min));
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("invalid email".to_string());
    }

    Ok(())
}

/// Validate a new password and its confirmation
pub fn validate_password(password: &str, confirmation: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH || password != confirmation {
        return Err("invalid password".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Parse a calendar date
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time part
/// (`2000-01-01T00:00:00.000Z`), which is ignored.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    let date_part = value.split_once('T').map_or(value, |(date, _)| date);

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| format!("{} must be a date in the format YYYY-MM-DD", field))
}

/// Parse a time of day in `HH:MM` (seconds optional)
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, String> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("{} must be a time in the format HH:MM", field))
}

/// Turn an optional free-text field into `None` when blank
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
