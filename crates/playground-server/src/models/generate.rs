//! Generate Models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use playground::{DomainError, PromptType, Response};

pub const MIN_MAX_TOKENS: u32 = 1;
pub const MAX_MAX_TOKENS: u32 = 4000;

/// Generate request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Raw user text (non-empty)
    pub prompt: String,
    pub prompt_type: PromptType,
    pub model: String,
    /// 0.0 - 1.0
    pub temperature: f64,
    /// 1 - 4000
    pub max_tokens: u32,
    /// Second model to run the same prompt through
    #[serde(default)]
    pub compare_model: Option<String>,
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.prompt.is_empty() {
            return Err(DomainError::validation("prompt must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(DomainError::validation(format!(
                "temperature must be between 0 and 1, got {}",
                self.temperature
            )));
        }
        if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&self.max_tokens) {
            return Err(DomainError::validation(format!(
                "maxTokens must be between {} and {}, got {}",
                MIN_MAX_TOKENS, MAX_MAX_TOKENS, self.max_tokens
            )));
        }
        Ok(())
    }

    /// Comparison model to run, if any. Blank or same-as-primary means none.
    pub fn effective_compare_model(&self) -> Option<&str> {
        self.compare_model
            .as_deref()
            .filter(|m| !m.is_empty() && *m != self.model)
    }

    /// Temperature as persisted (×100, rounded)
    pub fn stored_temperature(&self) -> i32 {
        (self.temperature * 100.0).round() as i32
    }
}

/// Generate response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub prompt_id: i32,
    pub primary_response: Response,
    pub compare_response: Option<Response>,
}
