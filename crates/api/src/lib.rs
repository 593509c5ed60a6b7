//! Public API traits and types for the onb293 library
//!
//! This crate provides the public API surface of the onb293 workspace: the
//! error type shared by every crate and the traits field element types
//! implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{BinaryField, Serialize};

// Re-export trait modules for direct access
pub use traits::{field, serialize};
