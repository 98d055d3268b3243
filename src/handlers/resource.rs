//! Resource controller: CRUD handlers generic over the entity kind.
//!
//! Each handler pulls the matching `ResourceStore<T>` out of the router state, so one set of
//! functions serves workouts, users and progress records.

use crate::config::ValidationMode;
use crate::error::AppError;
use crate::extractors::{JsonBody, PathParam};
use crate::models::Resource;
use crate::response::{success_many, success_message, success_one, success_one_ok};
use crate::service::RequestValidator;
use crate::store::ResourceStore;
use axum::{
    extract::State,
    response::IntoResponse,
};

pub async fn list<T: Resource>(State(store): State<ResourceStore<T>>) -> impl IntoResponse {
    success_many(store.list())
}

pub async fn read<T: Resource>(
    State(store): State<ResourceStore<T>>,
    PathParam(id): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let entity = store.get(&id)?;
    Ok(success_one_ok(entity))
}

/// Any `id` in the body is discarded; the store assigns one.
pub async fn create<T: Resource>(
    State(store): State<ResourceStore<T>>,
    State(mode): State<ValidationMode>,
    JsonBody(body): JsonBody<T>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate(mode, &body)?;
    Ok(success_one(store.create(body)))
}

/// Full replace: fields missing from the body are reset to their zero value, not kept.
pub async fn update<T: Resource>(
    State(store): State<ResourceStore<T>>,
    State(mode): State<ValidationMode>,
    PathParam(id): PathParam<String>,
    JsonBody(body): JsonBody<T>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate(mode, &body)?;
    let entity = store.update(&id, body)?;
    Ok(success_one_ok(entity))
}

pub async fn delete<T: Resource>(
    State(store): State<ResourceStore<T>>,
    PathParam(id): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    store.delete(&id)?;
    Ok(success_message(format!("{} deleted successfully", T::KIND)))
}
