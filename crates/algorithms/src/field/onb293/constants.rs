//! Shared constants for GF(2^293) operations

pub use onb293_params::field::onb293::{
    ONB_BIT_STRING_LEN, ONB_BYTES, ONB_HEX_DIGITS, ONB_HEX_PAD_BITS, ONB_LAMBDA_ENTRIES, ONB_M,
    ONB_P, ONB_TOP_WORD_MASK, ONB_WORDS, ONB_WORD_BITS,
};

/// Size of a GF(2^293) element in bytes (293 bits -> 37 bytes)
pub const ONB293_FIELD_ELEMENT_SIZE: usize = ONB_BYTES;

/// Size of a GF(2^293) exponent in bytes
pub const ONB293_EXPONENT_SIZE: usize = ONB_BYTES;

/// Length of the binary-string encoding in characters
pub const ONB293_BIT_STRING_LEN: usize = ONB_BIT_STRING_LEN;

/// Maximum length of the hexadecimal encoding in characters
pub const ONB293_HEX_LEN: usize = ONB_HEX_DIGITS;
