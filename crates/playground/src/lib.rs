//! Prompt Playground Domain Library
//!
//! Core domain types and interfaces for the Prompt Playground.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Persisted records (Prompt, Response)
//!   - `value_objects/`: Immutable value types (PromptType)
//!   - `services/`: Pure domain services (prompt templates)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (completion API)
//!
//! # Usage
//!
//! ```rust,ignore
//! use playground::{render_prompt, PromptType};
//!
//! let text = render_prompt("What is 2+2?", PromptType::ChainOfThought);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    render_prompt, DomainError, NewPrompt, NewResponse, Prompt, PromptType, Response,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
pub use ports::{
    estimate_cost, ChatMessage, Completion, CompletionProvider, CompletionRequest, MessageRole,
    PromptRepository, ResponseRepository, DEFAULT_RECENT_LIMIT,
};
