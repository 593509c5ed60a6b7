//! GF(2^293) field element in optimal normal basis coordinates

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::constants::{ONB_M, ONB_TOP_WORD_MASK, ONB_WORDS, ONB_WORD_BITS};
use super::exponent::Exponent;
use super::table::MultiplicationTable;

/// GF(2^293) element stored as its coordinate vector over the normal basis
/// {β, β², β⁴, …, β^(2^292)}.
///
/// Bit i (word `i / 32`, bit `i % 32`, least significant word first) is the
/// coefficient of β^(2^i). It is not a binary place value. Bits at
/// positions ≥ 293 are always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct FieldElement(pub(crate) [u32; ONB_WORDS]);

impl FieldElement {
    /* -------------------------------------------------------------------- */
    /*  Bit-vector core                                                     */
    /* -------------------------------------------------------------------- */

    /// Creates an element from raw words, clearing the bits above position 292.
    pub fn from_words(words: [u32; ONB_WORDS]) -> Self {
        let mut fe = FieldElement(words);
        fe.canonicalize();
        fe
    }

    /// The coordinate words, least significant first
    pub fn as_words(&self) -> &[u32; ONB_WORDS] {
        &self.0
    }

    /// Coefficient of β^(2^pos)
    #[inline(always)]
    pub fn bit(&self, pos: usize) -> bool {
        debug_assert!(pos < ONB_M);
        (self.0[pos / ONB_WORD_BITS] >> (pos % ONB_WORD_BITS)) & 1 == 1
    }

    #[inline(always)]
    pub(crate) fn set_bit(&mut self, pos: usize) {
        debug_assert!(pos < ONB_M);
        self.0[pos / ONB_WORD_BITS] |= 1u32 << (pos % ONB_WORD_BITS);
    }

    #[inline(always)]
    pub(crate) fn canonicalize(&mut self) {
        self.0[ONB_WORDS - 1] &= ONB_TOP_WORD_MASK;
    }

    /// Number of non-zero coordinates
    pub fn weight(&self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }

    /* -------------------------------------------------------------------- */
    /*  Constants and comparison                                            */
    /* -------------------------------------------------------------------- */

    /// The additive identity element: 0
    pub fn zero() -> Self {
        FieldElement([0; ONB_WORDS])
    }

    /// The multiplicative identity element: 1
    ///
    /// In this basis 1 is the sum of all conjugates of β, so every coordinate
    /// is set.
    pub fn one() -> Self {
        Self::from_words([u32::MAX; ONB_WORDS])
    }

    /// Check if the field element represents zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Check if the field element represents one
    pub fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Generate a uniformly random field element
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut words = [0u32; ONB_WORDS];
        for w in words.iter_mut() {
            *w = rng.next_u32();
        }
        Self::from_words(words)
    }

    /* -------------------------------------------------------------------- */
    /*  Addition                                                            */
    /* -------------------------------------------------------------------- */

    /// Field addition: coordinate-wise XOR
    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        let mut r = [0u32; ONB_WORDS];
        for (i, w) in r.iter_mut().enumerate() {
            *w = self.0[i] ^ other.0[i];
        }
        FieldElement(r)
    }

    /// Field subtraction, identical to addition in characteristic 2
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(other)
    }

    /* -------------------------------------------------------------------- */
    /*  Frobenius                                                           */
    /* -------------------------------------------------------------------- */

    /// In-place squaring: rotate the coordinate vector left by one position.
    ///
    /// Coordinate 292 moves to position 0 and every other coordinate i moves
    /// to i + 1.
    pub fn square_in_place(&mut self) {
        let msb = self.bit(ONB_M - 1);

        let mut carry = 0u32;
        for w in self.0.iter_mut() {
            let next = *w >> (ONB_WORD_BITS - 1);
            *w = (*w << 1) | carry;
            carry = next;
        }
        self.canonicalize();

        if msb {
            self.set_bit(0);
        }
    }

    /// Field squaring
    pub fn square(&self) -> Self {
        let mut r = *self;
        r.square_in_place();
        r
    }

    /// Squares `k` times, i.e. raises to the power 2^k.
    pub fn square_n(&self, k: usize) -> Self {
        self.rotate_right(ONB_M - k % ONB_M)
    }

    /// Square root: the inverse Frobenius map, a right rotation by one.
    ///
    /// Every element of a binary field has exactly one square root.
    pub fn sqrt(&self) -> Self {
        let lsb = self.bit(0);

        let mut r = self.0;
        for i in 0..ONB_WORDS {
            let hi = if i + 1 < ONB_WORDS { r[i + 1] << (ONB_WORD_BITS - 1) } else { 0 };
            r[i] = (r[i] >> 1) | hi;
        }

        let mut fe = FieldElement(r);
        if lsb {
            fe.set_bit(ONB_M - 1);
        }
        fe
    }

    /* -------------------------------------------------------------------- */
    /*  Multiplication                                                      */
    /* -------------------------------------------------------------------- */

    /// Field multiplication using the shared multiplication table.
    ///
    /// Builds the table on first use.
    pub fn mul(&self, other: &Self) -> Self {
        self.mul_with(other, MultiplicationTable::global())
    }

    /// Field multiplication using an explicit table.
    ///
    /// Output coordinate i is the XOR, over every (a, b) in the table, of
    /// `u[(i + a) mod m] & v[(i + b) mod m]`. All m coordinates are computed
    /// at once: rotating u right by a lines `u[(i + a) mod m]` up with
    /// position i, so each table entry costs one word-wise AND and XOR.
    pub fn mul_with(&self, other: &Self, table: &MultiplicationTable) -> Self {
        let mut u_rot = [FieldElement::zero(); ONB_M];
        let mut v_rot = [FieldElement::zero(); ONB_M];
        for k in 0..ONB_M {
            u_rot[k] = self.rotate_right(k);
            v_rot[k] = other.rotate_right(k);
        }

        let mut z = [0u32; ONB_WORDS];
        for (a, b) in table.iter() {
            let (ua, vb) = (&u_rot[a].0, &v_rot[b].0);
            for w in 0..ONB_WORDS {
                z[w] ^= ua[w] & vb[w];
            }
        }

        let mut fe = FieldElement(z);
        fe.canonicalize();
        fe
    }

    /* -------------------------------------------------------------------- */
    /*  Exponentiation and inversion                                        */
    /* -------------------------------------------------------------------- */

    /// Raises `self` to an m-bit unsigned exponent.
    ///
    /// Left-to-right square-and-multiply over exponent bits 292 down to 0.
    pub fn pow(&self, exp: &Exponent) -> Self {
        self.pow_with(exp, MultiplicationTable::global())
    }

    /// [`pow`](Self::pow) using an explicit table.
    pub fn pow_with(&self, exp: &Exponent, table: &MultiplicationTable) -> Self {
        let mut r = Self::one();
        for i in (0..ONB_M).rev() {
            r.square_in_place();
            if exp.bit(i) {
                r = r.mul_with(self, table);
            }
        }
        r
    }

    /// Raises `self` to a small exponent.
    pub fn pow_u64(&self, exp: u64) -> Self {
        self.pow(&Exponent::from_u64(exp))
    }

    /// Multiplicative inverse, with zero mapped to zero.
    ///
    /// Uses a⁻¹ = a^(2^m - 2) = a² · a⁴ · … · a^(2^(m-1)): 292 squarings and
    /// 292 multiplications. This is the most expensive operation on the type,
    /// roughly three hundred times the cost of a single `mul`.
    pub fn invert(&self) -> Self {
        self.invert_with(MultiplicationTable::global())
    }

    /// [`invert`](Self::invert) using an explicit table.
    pub fn invert_with(&self, table: &MultiplicationTable) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut t = *self;
        let mut inv = Self::one();
        for _ in 1..ONB_M {
            t.square_in_place();
            inv = inv.mul_with(&t, table);
        }
        inv
    }

    /// Multiplicative inverse, or `None` for zero
    pub fn checked_invert(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.invert())
        }
    }

    /// Field division `self / other`; a zero divisor yields zero.
    pub fn div(&self, other: &Self) -> Self {
        self.div_with(other, MultiplicationTable::global())
    }

    /// [`div`](Self::div) using an explicit table.
    pub fn div_with(&self, other: &Self, table: &MultiplicationTable) -> Self {
        self.mul_with(&other.invert_with(table), table)
    }

    /* -------------------------------------------------------------------- */
    /*  Trace                                                               */
    /* -------------------------------------------------------------------- */

    /// Absolute trace Tr: GF(2^293) → GF(2), returned as 0 or 1.
    ///
    /// Every conjugate of β has trace 1, so the trace is the parity of the
    /// coordinate vector.
    pub fn trace(&self) -> u8 {
        let mut x = self.0.iter().fold(0u32, |acc, &w| acc ^ w);
        x ^= x >> 16;
        x ^= x >> 8;
        x ^= x >> 4;
        x ^= x >> 2;
        x ^= x >> 1;
        (x & 1) as u8
    }

    /* -------------------------------------------------------------------- */
    /*  Rotation helpers                                                    */
    /* -------------------------------------------------------------------- */

    /// Cyclic rotation with `r[i] = self[(i + k) mod m]`.
    pub(crate) fn rotate_right(&self, k: usize) -> Self {
        let k = k % ONB_M;
        if k == 0 {
            return *self;
        }
        let hi = self.shr(k);
        let lo = self.shl(ONB_M - k);
        let mut fe = hi.add(&lo);
        fe.canonicalize();
        fe
    }

    /// Logical shift toward higher positions; bits pushed past 292 are dropped.
    fn shl(&self, k: usize) -> Self {
        let (ws, bs) = (k / ONB_WORD_BITS, k % ONB_WORD_BITS);
        let mut r = [0u32; ONB_WORDS];
        for i in ws..ONB_WORDS {
            let src = i - ws;
            let mut w = self.0[src] << bs;
            if bs != 0 && src > 0 {
                w |= self.0[src - 1] >> (ONB_WORD_BITS - bs);
            }
            r[i] = w;
        }
        let mut fe = FieldElement(r);
        fe.canonicalize();
        fe
    }

    /// Logical shift toward lower positions.
    fn shr(&self, k: usize) -> Self {
        let (ws, bs) = (k / ONB_WORD_BITS, k % ONB_WORD_BITS);
        let mut r = [0u32; ONB_WORDS];
        for i in 0..ONB_WORDS - ws {
            let src = i + ws;
            let mut w = self.0[src] >> bs;
            if bs != 0 && src + 1 < ONB_WORDS {
                w |= self.0[src + 1] << (ONB_WORD_BITS - bs);
            }
            r[i] = w;
        }
        FieldElement(r)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = Choice::from(1u8);
        for i in 0..ONB_WORDS {
            acc &= self.0[i].ct_eq(&other.0[i]);
        }
        acc
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = [0u32; ONB_WORDS];
        for (i, w) in r.iter_mut().enumerate() {
            *w = u32::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(r)
    }
}

impl onb293_api::BinaryField for FieldElement {
    const DEGREE: usize = ONB_M;

    fn zero() -> Self {
        FieldElement::zero()
    }

    fn one() -> Self {
        FieldElement::one()
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }

    fn is_one(&self) -> bool {
        FieldElement::is_one(self)
    }

    fn add(&self, other: &Self) -> Self {
        FieldElement::add(self, other)
    }

    fn mul(&self, other: &Self) -> Self {
        FieldElement::mul(self, other)
    }

    fn square(&self) -> Self {
        FieldElement::square(self)
    }

    fn invert(&self) -> Self {
        FieldElement::invert(self)
    }

    fn trace(&self) -> u8 {
        FieldElement::trace(self)
    }

    fn frobenius(&self, k: usize) -> Self {
        self.square_n(k)
    }
}
