//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod openrouter;
pub mod stub_completion;

// Re-exports
pub use memory::MemoryStore;
pub use openrouter::OpenRouterClient;

#[cfg(test)]
pub use stub_completion::StubCompletion;
