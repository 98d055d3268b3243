//! JSON body extractor that reports every read or decode failure as `AppError::InvalidBody`.
//!
//! Unlike `axum::Json` it does not require a `Content-Type: application/json` header.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidBody(e.body_text()))?;
        decode(&bytes).map(JsonBody)
    }
}

/// Body must be a JSON object; its present fields must have the right types. A bare `null`
/// body reads as `{}`, and `null` fields take their zero value.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value = match serde_json::from_slice::<Value>(bytes).map_err(|e| AppError::InvalidBody(e.to_string()))? {
        Value::Null => Value::Object(Map::new()),
        value @ Value::Object(_) => value,
        _ => return Err(AppError::InvalidBody("body must be a JSON object".into())),
    };
    serde_json::from_value(value).map_err(|e| AppError::InvalidBody(e.to_string()))
}
