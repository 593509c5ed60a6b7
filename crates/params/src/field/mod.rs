//! Constants for binary field representations

pub mod onb293;
