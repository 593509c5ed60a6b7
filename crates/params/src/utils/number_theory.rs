//! `const fn` number theory used to validate basis parameters

/// Trial-division primality test, usable in constant contexts.
pub const fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u32;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Multiplicative order of 2 modulo an odd modulus `p > 1`.
///
/// Returns 0 when `p` is even or smaller than 3, where the order is undefined.
pub const fn order_of_two(p: u32) -> u32 {
    if p < 3 || p % 2 == 0 {
        return 0;
    }
    let mut x = 2 % p;
    let mut k = 1u32;
    while x != 1 {
        x = (x * 2) % p;
        k += 1;
    }
    k
}

/// Returns `true` when `p = 2m + 1` yields a type-II optimal normal basis
/// of GF(2^m).
///
/// The condition is that `p` is prime and either 2 is a primitive root
/// modulo `p`, or `p ≡ 3 (mod 4)` and 2 generates the quadratic residues.
/// In both cases the set `{±2^k mod p : 0 ≤ k < m}` covers every non-zero
/// residue, which is what the multiplication table builder depends on.
pub const fn is_type2_onb_prime(m: u32, p: u32) -> bool {
    if p != 2 * m + 1 || !is_prime(p) {
        return false;
    }
    let ord = order_of_two(p);
    ord == 2 * m || (p % 4 == 3 && ord == m)
}
