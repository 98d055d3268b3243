//! Semantic request validation, applied on create and update when the server runs in strict mode.
//!
//! Soft references (`userId`, `workoutId`) are never resolved against the other stores.

use crate::config::ValidationMode;
use crate::error::AppError;
use crate::models::Resource;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

pub const LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a decoded body. Lenient mode accepts everything that decoded.
    pub fn validate<T: Resource>(mode: ValidationMode, body: &T) -> Result<(), AppError> {
        match mode {
            ValidationMode::Lenient => Ok(()),
            ValidationMode::Strict => body.validate(),
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
}

pub fn validate_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn validate_level(field: &str, value: &str) -> Result<(), AppError> {
    if !LEVELS.contains(&value) {
        return Err(AppError::Validation(format!(
            "{} must be one of: {}",
            field,
            LEVELS.join(", ")
        )));
    }
    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    if !email_regex().is_match(value) {
        return Err(AppError::Validation(format!("{} must be a valid email", field)));
    }
    Ok(())
}

pub fn validate_date(field: &str, value: &str) -> Result<(), AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| AppError::Validation(format!("{} must be a date in YYYY-MM-DD format", field)))
}

pub fn validate_non_negative(field: &str, value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!("{} must be at least 0", field)));
    }
    Ok(())
}
