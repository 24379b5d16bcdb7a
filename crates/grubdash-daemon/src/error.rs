//! HTTP mapping for every refusal the daemon can produce.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use grubdash_orders::OrderError;
use thiserror::Error;
use tracing::warn;

use crate::api_types::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Path not found: {0}")]
    PathNotFound(String),
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: Method, path: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Order(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::PathNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        warn!(status = status.as_u16(), %error, "request refused");
        (status, Json(ErrorResponse { error })).into_response()
    }
}
