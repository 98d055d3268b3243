//! Load server config from environment variables. Every variable is optional.

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::net::SocketAddr;

/// Read config from the process environment (call `dotenvy::dotenv()` first to pick up `.env`).
pub fn load_from_env() -> Result<ServerConfig, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

/// Build config from an arbitrary lookup, then validate it. Unset or blank keys keep their defaults.
pub fn load_with<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let mut config = ServerConfig::default();

    if let Some(v) = get("BIND_ADDR") {
        config.bind_addr = v
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue { key: "BIND_ADDR", value: v })?;
    }
    if let Some(v) = get("CORS_ALLOWED_ORIGINS") {
        config.allowed_origins = v
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(v) = get("ID_STRATEGY") {
        config.id_strategy = v.parse()?;
    }
    if let Some(v) = get("VALIDATION_MODE") {
        config.validation_mode = v.parse()?;
    }
    if let Some(v) = get("SEED_DATA") {
        config.seed_data = parse_bool("SEED_DATA", &v)?;
    }
    if let Some(v) = get("MAX_BODY_BYTES") {
        config.max_body_bytes = v
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key: "MAX_BODY_BYTES", value: v })?;
    }

    validate(&config)?;
    Ok(config)
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
