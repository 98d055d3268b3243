//! Config validation: values the router layers would otherwise reject at startup.

use crate::config::ServerConfig;
use crate::error::ConfigError;
use axum::http::HeaderValue;

pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.max_body_bytes == 0 {
        return Err(ConfigError::Validation("MAX_BODY_BYTES must be greater than 0".into()));
    }
    for origin in &config.allowed_origins {
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "origin '{}' must start with http:// or https://",
                origin
            )));
        }
        if HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::InvalidValue {
                key: "CORS_ALLOWED_ORIGINS",
                value: origin.clone(),
            });
        }
    }
    Ok(())
}
