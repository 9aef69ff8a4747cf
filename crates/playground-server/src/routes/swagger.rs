//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorBody, GenerateRequest, GenerateResponse, Prompt, PromptType, Response};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::generate::generate,
        super::prompts::list_prompts,
        super::prompts::recent_prompts,
        super::prompts::get_prompt,
        super::prompts::prompt_responses,
        super::responses::get_response,
    ),
    components(schemas(
        GenerateRequest,
        GenerateResponse,
        Prompt,
        PromptType,
        Response,
        ErrorBody,
    )),
    tags(
        (name = "Generate", description = "Run prompts against completion models"),
        (name = "Prompt", description = "Prompt history"),
        (name = "Response", description = "Stored completions")
    ),
    info(
        title = "Prompt Playground API",
        description = "Compare prompt strategies across language models"
    )
)]
pub struct ApiDoc;
