/// Field rules shared by the entity schemas

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});

/// A request field that breaks a schema rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Ids must carry at least one non-blank character
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::new(field, "value is not a valid email address"));
    }
    Ok(())
}

/// ISO-8601 date-time with an offset (RFC 3339), e.g. `2024-10-31T19:00:00Z`
pub fn require_timestamp(field: &'static str, value: &str) -> Result<(), ValidationError> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new(field, format!("invalid ISO-8601 timestamp: {}", e)))
}
