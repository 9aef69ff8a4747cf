//! Response Routes

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use playground::{DomainError, ResponseRepository};

use crate::error::ApiError;
use crate::models::Response;
use crate::AppState;

/// Get one stored response
#[utoipa::path(
    get,
    path = "/api/responses/{id}",
    params(("id" = i32, Path, description = "Response ID")),
    responses(
        (status = 200, description = "Response", body = Response),
        (status = 404, description = "Response not found", body = crate::models::ErrorBody)
    ),
    tag = "Response"
)]
pub async fn get_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Response>, ApiError> {
    let Ok(id) = id.parse::<i32>() else {
        return Err(DomainError::not_found("Response", id).into());
    };

    state
        .store
        .get_response(id)
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::not_found("Response", id).into())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/responses/:id", get(get_response))
}
