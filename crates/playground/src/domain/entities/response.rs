//! Response - Completion result record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response - Immutable record of one completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: i32,
    /// Weak reference to the originating Prompt
    pub prompt_id: Option<i32>,
    pub model: String,
    pub content: String,
    /// Raw upstream payload, kept verbatim for display
    #[schema(value_type = Object)]
    pub metadata: serde_json::Value,
    /// Estimated cost in micro-dollars
    pub cost: i64,
    /// Wall-clock duration in milliseconds
    pub duration: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a Response
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewResponse {
    pub prompt_id: Option<i32>,
    pub model: String,
    pub content: String,
    pub metadata: Option<serde_json::Value>,
    pub cost: Option<i64>,
    pub duration: Option<i64>,
}

impl Response {
    /// Materialize a record, filling defaults and stamping the creation time
    pub fn create(id: i32, new: NewResponse) -> Self {
        Self {
            id,
            prompt_id: new.prompt_id,
            model: new.model,
            content: new.content,
            metadata: new
                .metadata
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
            cost: new.cost.unwrap_or(0),
            duration: new.duration.unwrap_or(0),
            created_at: Utc::now(),
        }
    }
}
