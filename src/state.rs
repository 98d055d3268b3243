//! Shared application state: the three resource stores, owned for the lifetime of the server.

use crate::config::{ServerConfig, ValidationMode};
use crate::models::{ProgressRecord, UserProfile, WorkoutPlan};
use crate::seed;
use crate::store::ResourceStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub workouts: ResourceStore<WorkoutPlan>,
    pub users: ResourceStore<UserProfile>,
    pub progress: ResourceStore<ProgressRecord>,
    pub validation: ValidationMode,
}

impl AppState {
    /// Fresh stores per `config`, seeded with the sample entities when `seed_data` is set.
    pub fn new(config: &ServerConfig) -> Self {
        let strategy = config.id_strategy;
        let (workouts, users, progress) = if config.seed_data {
            (seed::workouts(), seed::users(), seed::progress())
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };
        AppState {
            workouts: ResourceStore::with_entries(strategy, workouts),
            users: ResourceStore::with_entries(strategy, users),
            progress: ResourceStore::with_entries(strategy, progress),
            validation: config.validation_mode,
        }
    }
}

impl FromRef<AppState> for ResourceStore<WorkoutPlan> {
    fn from_ref(state: &AppState) -> Self {
        state.workouts.clone()
    }
}

impl FromRef<AppState> for ResourceStore<UserProfile> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for ResourceStore<ProgressRecord> {
    fn from_ref(state: &AppState) -> Self {
        state.progress.clone()
    }
}

impl FromRef<AppState> for ValidationMode {
    fn from_ref(state: &AppState) -> Self {
        state.validation
    }
}
