//! Square roots in GF(p)
//!
//! Used for point decompression; operands are public, so the variable-time
//! view is used throughout.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{FieldOps, PrimeField};

/// Candidates tried when searching for a quadratic non-residue
const NON_RESIDUE_SEARCH_LIMIT: u32 = 1 << 16;

/// Euler's criterion: whether `a` is a square modulo p (zero counts)
pub fn is_square(field: &PrimeField, a: &BigUint) -> bool {
    let a = field.reduce(a);
    if a.is_zero() {
        return true;
    }
    let exponent = (field.modulus() - 1u32) >> 1;
    field.fast().pow(&a, &exponent).is_one()
}

/// A square root of `a` modulo p, or `None` when `a` is a non-residue
///
/// Takes the `(p+1)/4` shortcut for `p ≡ 3 (mod 4)` and falls back to
/// Tonelli-Shanks otherwise. The other root is `p - r`.
pub fn sqrt(field: &PrimeField, a: &BigUint) -> Option<BigUint> {
    let ops = field.fast();
    let p = field.modulus();
    let a = field.reduce(a);
    if a.is_zero() {
        return Some(BigUint::zero());
    }
    if !is_square(field, &a) {
        return None;
    }

    if p.bit(0) && p.bit(1) {
        let exponent = (p + 1u32) >> 2;
        let r = ops.pow(&a, &exponent);
        return (ops.sqr(&r) == a).then_some(r);
    }

    // p - 1 = q · 2^s with q odd
    let p_minus_one = p - 1u32;
    let s = p_minus_one.trailing_zeros()?;
    let q = &p_minus_one >> s;

    let z = (2..NON_RESIDUE_SEARCH_LIMIT)
        .map(BigUint::from)
        .find(|z| !is_square(field, z))?;

    let mut m = s;
    let mut c = ops.pow(&z, &q);
    let mut t = ops.pow(&a, &q);
    let mut r = ops.pow(&a, &((&q + 1u32) >> 1));

    while !t.is_one() {
        // least i with t^(2^i) = 1
        let mut i = 0u64;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            i += 1;
            if i == m {
                return None;
            }
            t2i = ops.sqr(&t2i);
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = ops.sqr(&b);
        }
        m = i;
        c = ops.sqr(&b);
        t = ops.mul(&t, &c);
        r = ops.mul(&r, &b);
    }
    Some(r)
}
