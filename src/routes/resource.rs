//! Resource routes under /api/v1: one collection path and one member path per entity kind.

use crate::handlers::fallback::method_not_allowed;
use crate::handlers::progress::list_by_user;
use crate::handlers::resource::{create, delete, list, read, update};
use crate::models::{ProgressRecord, Resource, UserProfile, WorkoutPlan};
use crate::state::AppState;
use crate::store::ResourceStore;
use axum::{
    extract::FromRef,
    routing::{get, MethodRouter},
    Router,
};

/// GET (list) and POST (create) on the collection. Other methods get a 405 envelope.
fn collection<T: Resource>() -> MethodRouter<AppState>
where
    ResourceStore<T>: FromRef<AppState>,
{
    get(list::<T>).post(create::<T>).fallback(method_not_allowed)
}

/// GET, PUT (full replace) and DELETE on one member.
fn member<T: Resource>() -> MethodRouter<AppState>
where
    ResourceStore<T>: FromRef<AppState>,
{
    get(read::<T>)
        .put(update::<T>)
        .delete(delete::<T>)
        .fallback(method_not_allowed)
}

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/workouts", collection::<WorkoutPlan>())
        .route("/workouts/:id", member::<WorkoutPlan>())
        .route("/users", collection::<UserProfile>())
        .route("/users/:id", member::<UserProfile>())
        .route("/progress", collection::<ProgressRecord>())
        .route("/progress/user/:user_id", get(list_by_user).fallback(method_not_allowed))
        .route("/progress/:id", member::<ProgressRecord>())
        .with_state(state)
}
