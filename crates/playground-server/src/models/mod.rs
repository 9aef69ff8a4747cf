//! API Data Models
//!
//! Request/response DTOs for the HTTP layer. Persisted records
//! (Prompt, Response) come straight from the domain crate.

mod error;
mod generate;
mod prompt;

pub use error::*;
pub use generate::*;
pub use prompt::*;

pub use playground::{Prompt, PromptType, Response};
