//! Unsigned 293-bit exponents for GF(2^293) exponentiation

use super::codec::decode_hex_grid;
use super::constants::{ONB293_EXPONENT_SIZE, ONB_M, ONB_TOP_WORD_MASK, ONB_WORDS, ONB_WORD_BITS};
use crate::error::{Error, Result};

/// An unsigned integer in [0, 2^293) used as an exponent.
///
/// Shares the word layout of [`FieldElement`](super::FieldElement), but bit i
/// carries the place value 2^i. The two types do not convert implicitly, so
/// field operations such as the Frobenius rotation cannot be applied to an
/// exponent by accident.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Exponent([u32; ONB_WORDS]);

impl Exponent {
    /// The exponent 0
    pub fn zero() -> Self {
        Exponent([0; ONB_WORDS])
    }

    /// Creates an exponent from a 64-bit integer.
    pub fn from_u64(value: u64) -> Self {
        let mut words = [0u32; ONB_WORDS];
        words[0] = value as u32;
        words[1] = (value >> 32) as u32;
        Exponent(words)
    }

    /// Creates an exponent from raw words, least significant first.
    ///
    /// Bits above position 292 are cleared.
    pub fn from_words(mut words: [u32; ONB_WORDS]) -> Self {
        words[ONB_WORDS - 1] &= ONB_TOP_WORD_MASK;
        Exponent(words)
    }

    /// 2^293 - 1, the order of the multiplicative group.
    pub fn field_order() -> Self {
        Self::from_words([u32::MAX; ONB_WORDS])
    }

    /// 2^293 - 2, the exponent that maps a non-zero element to its inverse.
    pub fn inverse_exponent() -> Self {
        let mut e = Self::field_order();
        e.0[0] &= !1;
        e
    }

    /// Parses a big-endian byte string.
    ///
    /// Returns an error if any bit above position 292 is set.
    pub fn from_be_bytes(bytes: &[u8; ONB293_EXPONENT_SIZE]) -> Result<Self> {
        Self::decode_be_bytes("exponent bytes", bytes)
    }

    /// Parses a big-endian hexadecimal integer of 1 to 74 digits.
    ///
    /// Returns an error for empty input, non-hex characters, or a value of
    /// 2^293 or more.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = decode_hex_grid("exponent hex", hex)?;
        Self::decode_be_bytes("exponent hex", &bytes)
    }

    fn decode_be_bytes(context: &'static str, bytes: &[u8; ONB293_EXPONENT_SIZE]) -> Result<Self> {
        let mut e = Self::zero();
        for (k, &byte) in bytes.iter().rev().enumerate() {
            for b in 0..8 {
                if (byte >> b) & 1 == 1 {
                    let pos = k * 8 + b;
                    if pos >= ONB_M {
                        return Err(Error::Overflow {
                            context,
                            max: ONB_M,
                            actual: pos + 1,
                        });
                    }
                    e.0[pos / ONB_WORD_BITS] |= 1 << (pos % ONB_WORD_BITS);
                }
            }
        }
        Ok(e)
    }

    /// The bit with place value 2^i
    #[inline(always)]
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < ONB_M);
        (self.0[i / ONB_WORD_BITS] >> (i % ONB_WORD_BITS)) & 1 == 1
    }

    /// Returns `true` for the exponent 0
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Bit length: index of the highest set bit plus one, or 0
    pub fn bits(&self) -> usize {
        for i in (0..ONB_WORDS).rev() {
            if self.0[i] != 0 {
                return i * ONB_WORD_BITS + (ONB_WORD_BITS - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// The words, least significant first
    pub fn as_words(&self) -> &[u32; ONB_WORDS] {
        &self.0
    }
}

impl From<u64> for Exponent {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
