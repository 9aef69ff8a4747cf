//! Generate Routes - Prompt → completion(s)

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use playground::DomainError;

use crate::error::ApiError;
use crate::models::{GenerateRequest, GenerateResponse};
use crate::AppState;

/// Generate completions for a prompt
///
/// POST /api/generate
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Prompt stored and completed", body = GenerateResponse),
        (status = 500, description = "Validation, upstream or network failure", body = crate::models::ErrorBody)
    ),
    tag = "Generate"
)]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::from(DomainError::validation(rejection.body_text()))
    })?;

    state.generation.generate(request).await.map(Json).map_err(|e| {
        tracing::error!("Error generating response: {}", e);
        ApiError::from(e)
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}
