//! Workout API: in-memory REST backend for workout plans, user profiles and progress records.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod id;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{load_from_env, IdStrategy, ServerConfig, ValidationMode};
pub use error::{AppError, ConfigError};
pub use models::{ProgressRecord, Resource, UserProfile, WorkoutPlan};
pub use response::{error_body, success_many, success_one, Envelope};
pub use routes::{app, common_routes, resource_routes};
pub use state::AppState;
pub use store::ResourceStore;
