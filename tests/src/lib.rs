//! Testing utilities for the onb293 library
//!
//! Shared proptest strategies and the known-answer vector loader used by the
//! integration tests in `tests/`.

pub mod strategies;
pub mod vectors;

use onb293::algorithms::{Exponent, FieldElement};

/// Decode a hex fixture, panicking with the fixture name on failure
pub fn element(name: &str, hex: &str) -> FieldElement {
    FieldElement::from_hex(hex).unwrap_or_else(|e| panic!("fixture {}: {}", name, e))
}

/// Decode an integer exponent fixture
pub fn exponent(name: &str, hex: &str) -> Exponent {
    Exponent::from_hex(hex).unwrap_or_else(|e| panic!("fixture {}: {}", name, e))
}
