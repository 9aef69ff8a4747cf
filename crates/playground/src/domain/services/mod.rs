//! Domain Services
//!
//! Stateless logic that operates on domain values.

mod template;

pub use template::*;
