//! A thin adapter library connecting Rust functions to LLM tool-calling APIs.
//!

pub use relay_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use relay_internal::prelude::*;
}
