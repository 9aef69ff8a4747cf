//! Prompt Playground API Routes
//!
//! - /api/generate - Run a prompt against one or two models
//! - /api/prompts - Prompt history
//! - /api/responses - Stored completions

pub mod generate;
pub mod prompts;
pub mod responses;
pub mod swagger;
