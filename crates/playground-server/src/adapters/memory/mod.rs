//! In-Memory Repository Implementations
//!
//! Volatile storage; contents are lost when the process exits.

mod store;

pub use store::MemoryStore;
