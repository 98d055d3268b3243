//! Progress-only query: records by owning user.

use crate::extractors::PathParam;
use crate::models::ProgressRecord;
use crate::response::success_many;
use crate::store::ResourceStore;
use axum::{
    extract::State,
    response::IntoResponse,
};

/// Always 200. An unknown user yields an empty list, not a 404.
pub async fn list_by_user(
    State(store): State<ResourceStore<ProgressRecord>>,
    PathParam(user_id): PathParam<String>,
) -> impl IntoResponse {
    success_many(store.list_by_user_id(&user_id))
}
