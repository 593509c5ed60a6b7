//! Text and byte encodings of GF(2^293) elements
//!
//! Binary strings list the 293 coordinates from position 292 down to 0.
//! Hexadecimal strings lay the same sequence over 74 nibbles, so position 292
//! is the high bit of the first nibble and the last nibble carries position 0
//! in its high bit followed by three padding bits. Leading zero nibbles are
//! stripped on output.

use core::fmt;
use core::str::FromStr;

use hex::FromHexError;

use super::constants::{
    ONB293_FIELD_ELEMENT_SIZE, ONB_BIT_STRING_LEN, ONB_BYTES, ONB_HEX_DIGITS, ONB_HEX_PAD_BITS,
    ONB_M, ONB_WORDS,
};
use super::element::FieldElement;
use crate::error::{to_core_result, validate, Error, Result};

/// Decodes 1 to 74 hex digits, right-aligned, into the 37-byte grid that
/// backs both hex layouts.
pub(crate) fn decode_hex_grid(context: &'static str, hex: &str) -> Result<[u8; ONB_BYTES]> {
    validate::max_length(context, hex.chars().count(), ONB_HEX_DIGITS)?;

    // Byte offsets only match character positions for ASCII input
    if !hex.is_ascii() {
        if let Some((position, found)) =
            hex.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidDigit { position, found });
        }
    }

    let pad = ONB_HEX_DIGITS - hex.len();
    let mut padded = [b'0'; ONB_HEX_DIGITS];
    padded[pad..].copy_from_slice(hex.as_bytes());

    let mut grid = [0u8; ONB_BYTES];
    hex::decode_to_slice(padded, &mut grid).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { c, index } => Error::InvalidDigit {
            position: index - pad,
            found: c,
        },
        _ => Error::format(context, "malformed hex digits"),
    })?;
    Ok(grid)
}

impl FieldElement {
    /* -------------------------------------------------------------------- */
    /*  Binary strings                                                      */
    /* -------------------------------------------------------------------- */

    /// Writes the 293-character binary form into `out`, returning the number
    /// of bytes written.
    pub fn write_binary(&self, out: &mut [u8]) -> Result<usize> {
        validate::buffer_capacity("binary string", out.len(), ONB_BIT_STRING_LEN)?;
        for (i, c) in out[..ONB_BIT_STRING_LEN].iter_mut().enumerate() {
            *c = if self.bit(ONB_M - 1 - i) { b'1' } else { b'0' };
        }
        Ok(ONB_BIT_STRING_LEN)
    }

    /// The 293-character binary form, coordinate 292 first
    pub fn to_binary_string(&self) -> String {
        let mut buf = [0u8; ONB_BIT_STRING_LEN];
        let n = match self.write_binary(&mut buf) {
            Ok(n) => n,
            Err(_) => unreachable!("buffer sized for the binary form"),
        };
        buf[..n].iter().map(|&b| b as char).collect()
    }

    /// Parses a binary string of exactly 293 `'0'`/`'1'` characters.
    pub fn from_binary_str(s: &str) -> Result<Self> {
        validate::exact_length("binary string", s.len(), ONB_BIT_STRING_LEN)?;

        let mut r = Self::zero();
        for (i, c) in s.bytes().enumerate() {
            match c {
                b'1' => r.set_bit(ONB_M - 1 - i),
                b'0' => {}
                _ => {
                    return Err(Error::format(
                        "binary string",
                        "characters must be '0' or '1'",
                    ))
                }
            }
        }
        Ok(r)
    }

    /* -------------------------------------------------------------------- */
    /*  Hexadecimal                                                         */
    /* -------------------------------------------------------------------- */

    /// The coordinate vector shifted up past the three padding bits, so that
    /// its 74 nibbles are the hex digits.
    fn hex_grid(&self) -> [u8; ONB_BYTES] {
        let bytes = self.to_bytes();
        let mut grid = [0u8; ONB_BYTES];
        for k in 0..ONB_BYTES {
            let next = bytes.get(k + 1).map_or(0, |&b| b >> (8 - ONB_HEX_PAD_BITS));
            grid[k] = (bytes[k] << ONB_HEX_PAD_BITS) | next;
        }
        grid
    }

    /// Writes the minimal uppercase hex form into `out`, returning its length.
    ///
    /// `out` must be able to hold the full 74-digit form.
    pub fn write_hex(&self, out: &mut [u8]) -> Result<usize> {
        validate::buffer_capacity("hex string", out.len(), ONB_HEX_DIGITS)?;

        let hex = self.to_hex();
        out[..hex.len()].copy_from_slice(hex.as_bytes());
        Ok(hex.len())
    }

    /// The minimal uppercase hex form; zero renders as `"0"`.
    pub fn to_hex(&self) -> String {
        let full = hex::encode_upper(self.hex_grid());
        match full.trim_start_matches('0') {
            "" => String::from("0"),
            digits => digits.to_string(),
        }
    }

    /// Parses 1 to 74 hex digits, right-aligned to the 74-digit grid.
    ///
    /// Padding bits below coordinate 0 in the last digit are ignored.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::decode_hex(hex, false)
    }

    /// Like [`from_hex`](Self::from_hex), but rejects input whose padding
    /// bits are set.
    pub fn from_hex_strict(hex: &str) -> Result<Self> {
        Self::decode_hex(hex, true)
    }

    fn decode_hex(hex: &str, strict: bool) -> Result<Self> {
        let grid = decode_hex_grid("hex string", hex)?;

        let pad_mask = (1u8 << ONB_HEX_PAD_BITS) - 1;
        let padding = grid[ONB_BYTES - 1] & pad_mask;
        if strict && padding != 0 {
            // Grid position of the first set padding bit, counted from the top
            let first = ONB_M + padding.leading_zeros() as usize - (8 - ONB_HEX_PAD_BITS);
            return Err(Error::Overflow {
                context: "hex string",
                max: ONB_M,
                actual: first + 1,
            });
        }

        let mut bytes = [0u8; ONB_BYTES];
        for k in 0..ONB_BYTES {
            let prev = if k == 0 { 0 } else { grid[k - 1] << (8 - ONB_HEX_PAD_BITS) };
            bytes[k] = (grid[k] >> ONB_HEX_PAD_BITS) | prev;
        }
        Self::from_bytes(&bytes)
    }

    /* -------------------------------------------------------------------- */
    /*  Bytes                                                               */
    /* -------------------------------------------------------------------- */

    /// Big-endian bytes of the coordinate vector: coordinate i is bit `i % 8`
    /// of byte `36 - i / 8`.
    pub fn to_bytes(&self) -> [u8; ONB293_FIELD_ELEMENT_SIZE] {
        let mut bytes = [0u8; ONB293_FIELD_ELEMENT_SIZE];
        for (k, byte) in bytes.iter_mut().rev().enumerate() {
            *byte = (self.0[k / 4] >> ((k % 4) * 8)) as u8;
        }
        bytes
    }

    /// Parses the big-endian byte form.
    ///
    /// Returns an error if a bit above coordinate 292 is set.
    pub fn from_bytes(bytes: &[u8; ONB293_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let mut words = [0u32; ONB_WORDS];
        for (k, &byte) in bytes.iter().rev().enumerate() {
            words[k / 4] |= (byte as u32) << ((k % 4) * 8);
        }

        let fe = FieldElement::from_words(words);
        if fe.0 != words {
            return Err(Error::format(
                "field element bytes",
                "bits above position 292 are set",
            ));
        }
        Ok(fe)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for FieldElement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl onb293_api::Serialize for FieldElement {
    fn from_bytes(bytes: &[u8]) -> onb293_api::Result<Self> {
        let arr: &[u8; ONB293_FIELD_ELEMENT_SIZE] =
            bytes.try_into().map_err(|_| onb293_api::Error::InvalidLength {
                context: "FieldElement::from_bytes",
                expected: ONB293_FIELD_ELEMENT_SIZE,
                actual: bytes.len(),
            })?;
        to_core_result(FieldElement::from_bytes(arr), "FieldElement::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        FieldElement::to_bytes(self).to_vec()
    }
}
