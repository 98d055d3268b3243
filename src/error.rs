//! Typed errors and HTTP mapping.

use crate::response::error_body;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("validation: {0}")]
    Validation(String),
}

/// Failures surfaced by the resource controllers. Each one becomes an envelope with `success: false`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Id absent from the targeted store. Carries the entity kind, e.g. "Workout".
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Body could not be read or decoded. The detail is logged, never returned to the client.
    #[error("Invalid request body")]
    InvalidBody(String),
    #[error("{0}")]
    Validation(String),
    /// A path parameter could not be decoded, e.g. invalid percent-encoding.
    #[error("Invalid path parameter")]
    InvalidPath(String),
    #[error("Route not found")]
    RouteNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidBody(detail) => tracing::debug!(%detail, "rejected request body"),
            AppError::InvalidPath(detail) => tracing::debug!(%detail, "rejected path parameter"),
            _ => {}
        }
        (self.status(), Json(error_body(self.to_string()))).into_response()
    }
}
