//! HTTP error mapping
//!
//! Every failure is rendered as `{ "message": ... }`. Domain errors other than
//! NotFound become 500, matching what clients of the generate endpoint expect.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use playground::DomainError;

use crate::models::ErrorBody;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match err {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}
