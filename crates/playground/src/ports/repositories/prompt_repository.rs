//! Prompt Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewPrompt, Prompt};

/// Number of prompts returned by a recent-prompts query when no limit is given
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Repository interface for Prompt entities
///
/// Ids start at 1 and increase by one per creation; they are never reused.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Assign the next id, fill defaults and store
    async fn create_prompt(&self, prompt: NewPrompt) -> Result<Prompt, DomainError>;

    /// Find a Prompt by ID
    async fn get_prompt(&self, id: i32) -> Result<Option<Prompt>, DomainError>;

    /// All Prompts in insertion order
    async fn get_prompts(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Newest first, at most `limit` entries; ties keep insertion order
    async fn get_recent_prompts(&self, limit: usize) -> Result<Vec<Prompt>, DomainError>;
}
