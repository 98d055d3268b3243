//! Responses for requests no route or method accepts, in the same envelope as every other error.

use crate::error::AppError;

pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Known path, method not served there.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
