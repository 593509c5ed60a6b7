//! Arithmetic surface of a binary extension field GF(2^m)

/// Operations every GF(2^m) element type exposes.
///
/// Addition is its own inverse in characteristic 2, so there is no separate
/// negation or subtraction. `invert` is total: implementations map zero to
/// zero rather than failing.
pub trait BinaryField: Sized + Clone + PartialEq + core::fmt::Debug {
    /// Extension degree m
    const DEGREE: usize;

    /// The additive identity
    fn zero() -> Self;

    /// The multiplicative identity
    fn one() -> Self;

    /// Returns `true` for the additive identity
    fn is_zero(&self) -> bool;

    /// Returns `true` for the multiplicative identity
    fn is_one(&self) -> bool;

    /// Field addition
    fn add(&self, other: &Self) -> Self;

    /// Field multiplication
    fn mul(&self, other: &Self) -> Self;

    /// Field squaring (the Frobenius map)
    fn square(&self) -> Self;

    /// Multiplicative inverse, with zero mapped to zero
    fn invert(&self) -> Self;

    /// Absolute trace into GF(2), returned as 0 or 1
    fn trace(&self) -> u8;

    /// Applies the Frobenius map `k` times.
    fn frobenius(&self, k: usize) -> Self {
        let mut r = self.clone();
        for _ in 0..k % Self::DEGREE {
            r = r.square();
        }
        r
    }
}
