//! GF(2^293) in a Type-II Optimal Normal Basis
//!
//! This module implements arithmetic in the binary field GF(2^293) using the
//! normal basis {β, β², β⁴, …, β^(2^292)} obtained from the Gauss period
//! construction with the auxiliary prime p = 2·293 + 1 = 587.
//! - Squaring is a cyclic rotation of the coordinate vector.
//! - Multiplication uses a precomputed matrix with 2m - 1 = 585 entries.
//! - The trace is the parity of the coordinate vector.
//!
//! Operations are not constant-time.

mod codec;
mod constants;
mod element;
mod exponent;
mod table;

pub use constants::{
    ONB293_BIT_STRING_LEN, ONB293_EXPONENT_SIZE, ONB293_FIELD_ELEMENT_SIZE, ONB293_HEX_LEN,
};
pub use element::FieldElement;
pub use exponent::Exponent;
pub use table::MultiplicationTable;
