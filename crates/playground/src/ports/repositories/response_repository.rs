//! Response Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewResponse, Response};

/// Repository interface for Response entities
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Assign the next id, fill defaults and store
    async fn create_response(&self, response: NewResponse) -> Result<Response, DomainError>;

    /// Find a Response by ID
    async fn get_response(&self, id: i32) -> Result<Option<Response>, DomainError>;

    /// Every Response whose `prompt_id` equals `prompt_id`, in insertion order
    async fn get_responses_by_prompt_id(
        &self,
        prompt_id: i32,
    ) -> Result<Vec<Response>, DomainError>;
}
