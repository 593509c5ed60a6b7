//! Binary Extension Field Arithmetic
//!
//! This module provides arithmetic over binary extension fields GF(2^m).
//! Currently GF(2^293) is implemented in a type-II optimal normal basis,
//! where squaring is a cyclic rotation of the coordinate vector and
//! multiplication runs over a sparse bilinear form with 2m - 1 terms.

pub mod onb293;

pub use onb293::{
    Exponent as Onb293Exponent, FieldElement as Onb293Element,
    MultiplicationTable as Onb293MultiplicationTable,
};
