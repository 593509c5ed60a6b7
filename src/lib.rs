//! # onb293
//!
//! Arithmetic in the binary field GF(2^293) over a type-II optimal normal
//! basis.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! onb293 = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): the arithmetic kernel
//! - `rand`: re-export of the `rand` crate for element generation
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`onb293-api`]: Error type and the `BinaryField`/`Serialize` traits
//! - [`onb293-params`]: Fixed basis parameters, checked at compile time
//! - [`onb293-algorithms`]: The GF(2^293) kernel

// Core re-exports (always available)
pub use onb293_api as api;
pub use onb293_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use onb293_algorithms as algorithms;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for onb293 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{BinaryField, Serialize};

    // Re-export the field types
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Exponent, FieldElement, MultiplicationTable};

    // Constant-time helpers implemented by FieldElement
    pub use subtle::{ConditionallySelectable, ConstantTimeEq};

    pub use zeroize::Zeroize;
}
