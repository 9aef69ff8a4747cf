//! Generation Application Service (Use Case)
//!
//! Persists the prompt, renders its template, calls the completion API for the
//! primary model and optionally a comparison model, and persists each result.

use std::sync::Arc;

use playground::{
    render_prompt, CompletionProvider, CompletionRequest, DomainError, NewPrompt, NewResponse,
    PromptRepository, Response, ResponseRepository,
};

use crate::models::{GenerateRequest, GenerateResponse};

/// Application service for the generate operation
pub struct GenerationService<S: PromptRepository + ResponseRepository> {
    store: Arc<S>,
    provider: Arc<dyn CompletionProvider>,
}

impl<S: PromptRepository + ResponseRepository> GenerationService<S> {
    pub fn new(store: Arc<S>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { store, provider }
    }

    /// Run one generate request.
    ///
    /// Any completion failure aborts the whole operation, including a failure
    /// of the comparison call after the primary result was stored.
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, DomainError> {
        request.validate()?;

        let prompt = self
            .store
            .create_prompt(
                NewPrompt::new(request.prompt.as_str(), request.prompt_type, request.model.as_str())
                    .with_temperature(request.stored_temperature())
                    .with_max_tokens(request.max_tokens as i32),
            )
            .await?;

        tracing::info!(
            "Created Prompt {} ({}, model {})",
            prompt.id,
            prompt.prompt_type,
            prompt.model
        );

        let final_prompt = render_prompt(&request.prompt, request.prompt_type);

        let primary_response = self
            .complete_and_store(prompt.id, &final_prompt, &request.model, &request)
            .await?;

        let compare_response = match request.effective_compare_model() {
            Some(compare_model) => Some(
                self.complete_and_store(prompt.id, &final_prompt, compare_model, &request)
                    .await?,
            ),
            None => None,
        };

        Ok(GenerateResponse {
            prompt_id: prompt.id,
            primary_response,
            compare_response,
        })
    }

    async fn complete_and_store(
        &self,
        prompt_id: i32,
        final_prompt: &str,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<Response, DomainError> {
        let completion = self
            .provider
            .complete(&CompletionRequest {
                prompt: final_prompt.to_string(),
                model: model.to_string(),
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            })
            .await?;

        let response = self
            .store
            .create_response(NewResponse {
                prompt_id: Some(prompt_id),
                model: model.to_string(),
                content: completion.content,
                metadata: Some(completion.metadata),
                cost: Some(completion.cost),
                duration: Some(completion.duration),
            })
            .await?;

        tracing::info!(
            "Stored Response {} for Prompt {} via {} ({} ms, {} µ$)",
            response.id,
            prompt_id,
            self.provider.provider_name(),
            response.duration,
            response.cost
        );

        Ok(response)
    }
}
