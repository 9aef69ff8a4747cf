//! Prompt Routes - History lookups

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use playground::{DomainError, PromptRepository, ResponseRepository};

use crate::error::ApiError;
use crate::models::{Prompt, RecentPromptsQuery, Response};
use crate::AppState;

/// List all prompts
#[utoipa::path(
    get,
    path = "/api/prompts",
    responses(
        (status = 200, description = "All prompts in creation order", body = Vec<Prompt>),
        (status = 500, description = "Internal server error", body = crate::models::ErrorBody)
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(State(state): State<AppState>) -> Result<Json<Vec<Prompt>>, ApiError> {
    Ok(Json(state.store.get_prompts().await?))
}

/// Most recent prompts, newest first
#[utoipa::path(
    get,
    path = "/api/prompts/recent",
    params(RecentPromptsQuery),
    responses(
        (status = 200, description = "Recent prompts", body = Vec<Prompt>),
        (status = 500, description = "Internal server error", body = crate::models::ErrorBody)
    ),
    tag = "Prompt"
)]
pub async fn recent_prompts(
    State(state): State<AppState>,
    Query(query): Query<RecentPromptsQuery>,
) -> Result<Json<Vec<Prompt>>, ApiError> {
    let prompts = state
        .store
        .get_recent_prompts(query.effective_limit())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching recent prompts: {}", e);
            ApiError::from(e)
        })?;
    Ok(Json(prompts))
}

/// Get one prompt
#[utoipa::path(
    get,
    path = "/api/prompts/{id}",
    params(("id" = i32, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt", body = Prompt),
        (status = 404, description = "Prompt not found", body = crate::models::ErrorBody)
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Prompt>, ApiError> {
    let Ok(id) = id.parse::<i32>() else {
        return Err(DomainError::not_found("Prompt", id).into());
    };

    state
        .store
        .get_prompt(id)
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::not_found("Prompt", id).into())
}

/// Responses generated for a prompt
///
/// An unknown or malformed id yields an empty list.
#[utoipa::path(
    get,
    path = "/api/prompts/{id}/responses",
    params(("id" = i32, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Responses for the prompt", body = Vec<Response>),
        (status = 500, description = "Internal server error", body = crate::models::ErrorBody)
    ),
    tag = "Prompt"
)]
pub async fn prompt_responses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Response>>, ApiError> {
    let Ok(prompt_id) = id.parse::<i32>() else {
        return Ok(Json(vec![]));
    };

    let responses = state
        .store
        .get_responses_by_prompt_id(prompt_id)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching responses: {}", e);
            ApiError::from(e)
        })?;
    Ok(Json(responses))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prompts", get(list_prompts))
        .route("/api/prompts/recent", get(recent_prompts))
        .route("/api/prompts/:id", get(get_prompt))
        .route("/api/prompts/:id/responses", get(prompt_responses))
}
