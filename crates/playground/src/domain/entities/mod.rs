//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: A submitted text plus its generation parameters
//! - Response: One completion result tied to a Prompt

mod prompt;
mod response;

pub use prompt::*;
pub use response::*;
