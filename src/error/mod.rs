//! Error handling for reaindex
//!
//! Error types, the crate-wide result alias, and helpers for attaching
//! context to foreign errors.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{ErrorSeverity, IndexError, Result};
