//! Server configuration types.

use crate::error::ConfigError;
use std::net::SocketAddr;

/// How a store mints ids for new entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Per-store counter rendered with the kind prefix, e.g. `workout_4`. Never reused after deletes.
    #[default]
    Sequential,
    /// Random v4 UUID.
    Uuid,
}

impl std::str::FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            _ => Err(ConfigError::InvalidValue {
                key: "ID_STRATEGY",
                value: s.to_string(),
            }),
        }
    }
}

/// Whether create/update run semantic checks on top of structural decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Accept anything that decodes.
    #[default]
    Lenient,
    /// Also check enum membership, email and date shape, non-negative durations.
    Strict,
}

impl std::str::FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ValidationMode::Lenient),
            "strict" => Ok(ValidationMode::Strict),
            _ => Err(ConfigError::InvalidValue {
                key: "VALIDATION_MODE",
                value: s.to_string(),
            }),
        }
    }
}

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:3000"];
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Origins allowed by the CORS layer. Empty means no cross-origin access.
    pub allowed_origins: Vec<String>,
    pub id_strategy: IdStrategy,
    pub validation_mode: ValidationMode,
    /// Load the sample workouts, user and progress record at startup.
    pub seed_data: bool,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            id_strategy: IdStrategy::default(),
            validation_mode: ValidationMode::default(),
            seed_data: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
