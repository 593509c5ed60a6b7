//! Finite field arithmetic kernel of the onb293 library
//!
//! This crate implements GF(2^293) in a type-II optimal normal basis:
//! coordinate vectors stored in 32-bit words, squaring by rotation,
//! multiplication over a sparse precomputed matrix, exponentiation,
//! inversion, the absolute trace, and binary, hexadecimal and byte
//! encodings.
//!
//! # Example
//!
//! ```
//! use onb293_algorithms::field::onb293::FieldElement;
//!
//! let a = FieldElement::from_hex("6F8C2A91D3B7E4F05A9C1E7D4B20F8").unwrap();
//! assert_eq!(a.mul(&FieldElement::one()), a);
//! assert_eq!(a.mul(&a), a.square());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Binary extension fields
pub mod field;
pub use field::onb293::{Exponent, FieldElement, MultiplicationTable};
