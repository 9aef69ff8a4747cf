//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod prompt_repository;
mod response_repository;

pub use prompt_repository::*;
pub use response_repository::*;
