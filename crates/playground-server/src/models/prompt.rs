//! Prompt Query Models

use serde::Deserialize;
use utoipa::IntoParams;

use playground::DEFAULT_RECENT_LIMIT;

/// Query parameters for the recent prompts endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RecentPromptsQuery {
    /// Maximum number of prompts (default: 10)
    pub limit: Option<String>,
}

impl RecentPromptsQuery {
    /// Parsed limit; absent, unparsable and non-positive values use the default.
    pub fn effective_limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_RECENT_LIMIT)
    }
}
