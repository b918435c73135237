// server/error.rs - Handler error responses
//
// All handler failures render as `{"detail": ...}` with the matching
// status code.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the REST handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Producto no encontrado")]
    ProductNotFound,

    #[error("{0}")]
    InvalidQuery(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ProductNotFound => StatusCode::NOT_FOUND,
            ServiceError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
