//! Trait definitions shared across the onb293 crates

pub mod field;
pub mod serialize;

pub use field::BinaryField;
pub use serialize::Serialize;
