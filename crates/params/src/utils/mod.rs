//! Compile-time helpers shared by the parameter modules

pub mod number_theory;
