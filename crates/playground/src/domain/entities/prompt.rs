//! Prompt - A submitted text and its generation parameters
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::PromptType;

/// Temperature used when none is supplied (0.70, stored ×100)
pub const DEFAULT_TEMPERATURE: i32 = 70;

/// Completion length used when none is supplied
pub const DEFAULT_MAX_TOKENS: i32 = 500;

/// Prompt - Immutable record of one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: i32,
    pub content: String,
    pub prompt_type: PromptType,
    pub model: String,
    /// Sampling temperature ×100 (0-100)
    pub temperature: i32,
    pub max_tokens: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a Prompt
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrompt {
    pub content: String,
    pub prompt_type: PromptType,
    pub model: String,
    pub temperature: Option<i32>,
    pub max_tokens: Option<i32>,
}

impl NewPrompt {
    pub fn new(content: impl Into<String>, prompt_type: PromptType, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            prompt_type,
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: i32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

impl Prompt {
    /// Materialize a record, filling defaults and stamping the creation time
    pub fn create(id: i32, new: NewPrompt) -> Self {
        Self {
            id,
            content: new.content,
            prompt_type: new.prompt_type,
            model: new.model,
            temperature: new.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: new.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            created_at: Utc::now(),
        }
    }
}
