//! Constants for GF(2^293) in a type-II optimal normal basis

use crate::utils::number_theory::is_type2_onb_prime;

/// Extension degree m of the field GF(2^m)
pub const ONB_M: usize = 293;

/// Auxiliary prime p = 2m + 1 of the Gauss period construction
pub const ONB_P: usize = 2 * ONB_M + 1;

/// Width in bits of one storage word
pub const ONB_WORD_BITS: usize = 32;

/// Number of 32-bit words holding one element
pub const ONB_WORDS: usize = (ONB_M + ONB_WORD_BITS - 1) / ONB_WORD_BITS;

/// Number of valid bits in the most significant word
pub const ONB_TOP_WORD_BITS: usize = ONB_M - (ONB_WORDS - 1) * ONB_WORD_BITS;

/// Mask of the valid bits in the most significant word
pub const ONB_TOP_WORD_MASK: u32 = if ONB_TOP_WORD_BITS == ONB_WORD_BITS {
    u32::MAX
} else {
    (1u32 << ONB_TOP_WORD_BITS) - 1
};

/// Number of non-zero entries of the multiplication matrix (2m - 1)
pub const ONB_LAMBDA_ENTRIES: usize = 2 * ONB_M - 1;

/// Length of the binary-string encoding (one character per coordinate)
pub const ONB_BIT_STRING_LEN: usize = ONB_M;

/// Number of hex digits covering all m coordinates
pub const ONB_HEX_DIGITS: usize = (ONB_M + 3) / 4;

/// Number of padding bits in the last hex digit
pub const ONB_HEX_PAD_BITS: usize = ONB_HEX_DIGITS * 4 - ONB_M;

/// Size of the big-endian byte encoding of an element
pub const ONB_BYTES: usize = (ONB_M + 7) / 8;

// The basis is only valid if 2m+1 is a prime for which {±2^k} covers
// every non-zero residue.
const _: () = assert!(is_type2_onb_prime(ONB_M as u32, ONB_P as u32));
const _: () = assert!(ONB_WORDS * ONB_WORD_BITS >= ONB_M);
const _: () = assert!(ONB_P < u16::MAX as usize);
