//! Sparse multiplication matrix of the type-II optimal normal basis
//!
//! With β = γ + γ⁻¹ for a primitive p-th root of unity γ, the product of two
//! conjugates expands as
//!
//! β^(2^i) · β^(2^j) = Σ (γ^(±2^i ± 2^j) terms)
//!
//! and the coefficient of β itself is 1 exactly when one of ±2^i ± 2^j is
//! congruent to 1 modulo p. The pairs (i, j) with that property form the
//! matrix λ; every other output coordinate uses the same matrix shifted
//! along the diagonal, because the basis is closed under the Frobenius map.

use std::sync::OnceLock;

use tracing::{debug, trace};

use super::constants::{ONB_LAMBDA_ENTRIES, ONB_M, ONB_P};
use crate::error::{Error, Result};

/// The (i, j) index pairs of the multiplication matrix λ
///
/// A table is immutable once built. [`MultiplicationTable::global`] holds the
/// process-wide instance used by [`FieldElement::mul`](super::FieldElement::mul);
/// callers that prefer explicit ownership can build their own and pass it to
/// [`FieldElement::mul_with`](super::FieldElement::mul_with).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplicationTable {
    pairs: Vec<(u16, u16)>,
}

static GLOBAL_TABLE: OnceLock<MultiplicationTable> = OnceLock::new();

impl MultiplicationTable {
    /// Builds the table for GF(2^293), reporting a wrong entry count as an error.
    pub fn try_build() -> Result<Self> {
        Self::try_build_with(ONB_M, ONB_P, ONB_LAMBDA_ENTRIES)
    }

    /// Builds the table for GF(2^293).
    ///
    /// # Panics
    ///
    /// Panics if the builder does not find exactly 2m - 1 entries. That can
    /// only happen if the fixed basis parameters are wrong, which
    /// `onb293-params` already rules out at compile time.
    pub fn build() -> Self {
        match Self::try_build() {
            Ok(table) => table,
            Err(e) => panic!("invalid optimal normal basis parameters: {}", e),
        }
    }

    /// The shared table, built on first use.
    ///
    /// Concurrent first callers block until a single construction finishes;
    /// every caller observes the fully built table.
    pub fn global() -> &'static Self {
        GLOBAL_TABLE.get_or_init(Self::build)
    }

    /// All (i, j) pairs in row-major order
    pub fn pairs(&self) -> &[(u16, u16)] {
        &self.pairs
    }

    /// Iterator over the pairs as `usize` indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().map(|&(i, j)| (i as usize, j as usize))
    }

    /// Number of non-zero entries
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns `true` if λ(i, j) = 1
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.iter().any(|pair| pair == (i, j))
    }

    pub(crate) fn try_build_with(m: usize, p: usize, expected: usize) -> Result<Self> {
        trace!(m, p, "building optimal normal basis multiplication table");

        let pairs = lambda_pairs(m, p);
        if pairs.len() != expected {
            return Err(Error::TableInvariant {
                expected,
                actual: pairs.len(),
            });
        }

        debug!(m, p, entries = pairs.len(), "multiplication table ready");
        Ok(MultiplicationTable { pairs })
    }
}

/// Collects every (i, j) in [0, m)² with ±2^i ± 2^j ≡ 1 (mod p).
///
/// Each ordered pair is visited exactly once, so no pair is recorded twice.
fn lambda_pairs(m: usize, p: usize) -> Vec<(u16, u16)> {
    let p = p as i64;
    let modp = |x: i64| x.rem_euclid(p);

    let mut pow2 = vec![1i64; m];
    for k in 1..m {
        pow2[k] = (pow2[k - 1] << 1) % p;
    }

    let mut pairs = Vec::with_capacity(2 * m);
    for (i, &a) in pow2.iter().enumerate() {
        for (j, &b) in pow2.iter().enumerate() {
            let hit = modp(a + b) == 1
                || modp(a - b) == 1
                || modp(-a + b) == 1
                || modp(-a - b) == 1;
            if hit {
                pairs.push((i as u16, j as u16));
            }
        }
    }
    pairs
}
