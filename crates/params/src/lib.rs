//! Constant values for the onb293 field arithmetic
//!
//! This crate provides the fixed structural parameters of the GF(2^293)
//! type-II optimal normal basis together with the number-theoretic checks
//! those parameters rely on. Everything here is `const`, so a wrong parameter
//! set is rejected when the crate is compiled.

#![no_std]

pub mod field;
pub mod utils;
