//! Completion Provider Port
//!
//! Abstract interface for a chat-completion API. The server wires in an
//! HTTP implementation; tests substitute a stub.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Price estimate: $0.002 per 1000 tokens
pub const USD_PER_THOUSAND_TOKENS: f64 = 0.002;

/// Role of a message in a conversation. Only user turns are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// One completion call's inputs
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Final (already templated) prompt text
    pub prompt: String,
    pub model: String,
    /// 0.0 - 1.0
    pub temperature: f64,
    /// 1 - 4000
    pub max_tokens: u32,
}

/// Normalized completion result
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub content: String,
    /// Full upstream body, untouched
    pub metadata: serde_json::Value,
    /// Micro-dollars
    pub cost: i64,
    /// Milliseconds
    pub duration: i64,
}

/// Rough cost estimate in micro-dollars for `total_tokens`.
pub fn estimate_cost(total_tokens: u64) -> i64 {
    (total_tokens as f64 * USD_PER_THOUSAND_TOKENS * 1000.0).round() as i64
}

/// Chat-completion interface
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue exactly one completion call. No retries.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, DomainError>;

    /// Provider name used in logs
    fn provider_name(&self) -> &str;
}
