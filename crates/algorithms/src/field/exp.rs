//! Modular exponentiation ladders
//!
//! Every routine here returns `base^exp mod p` for the field behind `ops`.
//! They differ only in the sequence of multiplications they perform, which
//! is what a timing or power trace observes. An exponent of zero yields 1.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::Zeroize;

use ecprime_internal::constant_time::ct_table_lookup;

use super::FieldOps;
use crate::error::{Error, Result};

/// Window width used by [`pow_window`] callers that have no preference
pub const DEFAULT_WINDOW_BITS: usize = 4;

/// Largest supported window width (a 256-entry table)
const MAX_WINDOW_BITS: usize = 8;

/// Left-to-right square-and-multiply-always (Coron, CHES 1999)
///
/// Every bit costs one squaring and one multiplication; for a zero bit the
/// product lands in a scratch register.
pub fn pow_always_multiply<F: FieldOps + ?Sized>(ops: &F, base: &BigUint, exp: &BigUint) -> BigUint {
    if exp.is_zero() {
        return BigUint::one();
    }
    let base = ops.field().reduce(base);
    let k = exp.bits();
    let mut r = [base.clone(), base.clone()];
    for i in (0..k - 1).rev() {
        r[0] = ops.sqr(&r[0]);
        let b = 1 - exp.bit(i) as usize;
        r[b] = ops.mul(&r[0], &base);
    }
    let [result, _] = r;
    result
}

/// Atomic square-and-multiply
///
/// A single multiplication per iteration; the register index `b` decides
/// whether it acts as a squaring or as a multiplication by the base, and a
/// one-bit is consumed over two iterations.
pub fn pow_atomic<F: FieldOps + ?Sized>(ops: &F, base: &BigUint, exp: &BigUint) -> BigUint {
    let base = ops.field().reduce(base);
    let mut r = [BigUint::one(), base];
    let mut b = 0usize;
    let mut i = exp.bits() as i64 - 1;
    while i >= 0 {
        r[0] = ops.mul(&r[0], &r[b]);
        b ^= exp.bit(i as u64) as usize;
        i -= 1 - b as i64;
    }
    let [result, _] = r;
    result
}

/// Montgomery powering ladder over the bits of `exp`
///
/// Keeps `R1 = R0 · base` after every step.
pub fn pow_montgomery<F: FieldOps + ?Sized>(ops: &F, base: &BigUint, exp: &BigUint) -> BigUint {
    montgomery_ladder(ops, base, exp, exp.bits())
}

/// Montgomery ladder over exactly `width` bits (`width >= exp.bits()`)
///
/// Register roles are exchanged with a masked swap instead of indexing by
/// the exponent bit.
pub(crate) fn montgomery_ladder<F: FieldOps + ?Sized>(
    ops: &F,
    base: &BigUint,
    exp: &BigUint,
    width: u64,
) -> BigUint {
    let field = ops.field();
    let mut r0 = BigUint::one();
    let mut r1 = field.reduce(base);
    for i in (0..width).rev() {
        let choice = Choice::from(exp.bit(i) as u8);
        field.ct_swap(&mut r0, &mut r1, choice);
        r1 = ops.mul(&r0, &r1);
        r0 = ops.sqr(&r0);
        field.ct_swap(&mut r0, &mut r1, choice);
    }
    r0
}

/// Montgomery ladder with randomized register assignment
///
/// Which physical register holds which logical value is re-drawn from `rng`
/// whenever the exponent bit disagrees with the current assignment, so the
/// register written first no longer mirrors the exponent.
pub fn pow_montgomery_randomized<F, R>(ops: &F, base: &BigUint, exp: &BigUint, rng: &mut R) -> BigUint
where
    F: FieldOps + ?Sized,
    R: RngCore + CryptoRng + ?Sized,
{
    let base = ops.field().reduce(base);
    let mut rb = (rng.next_u32() & 1) as usize;
    let mut r = [
        BigUint::one(),
        if rb == 0 { base.clone() } else { BigUint::one() },
    ];
    for i in (0..exp.bits()).rev() {
        let bit = exp.bit(i) as usize;
        if bit ^ rb == 1 {
            rb = (rng.next_u32() & 1) as usize;
        }
        r[rb] = ops.mul(&r[0], &r[rb ^ bit]);
        r[rb ^ 1] = ops.mul(&r[rb], &base);
    }
    let [result, _] = r;
    result
}

/// Fixed-window exponentiation with a scanned lookup table
///
/// Precomputes `base^0 .. base^(2^w - 1)` and reads each window digit by
/// touching every table entry. The number of windows is fixed by the
/// larger of the exponent and modulus widths.
pub fn pow_window<F: FieldOps + ?Sized>(
    ops: &F,
    base: &BigUint,
    exp: &BigUint,
    window_bits: usize,
) -> Result<BigUint> {
    if window_bits == 0 || window_bits > MAX_WINDOW_BITS {
        return Err(Error::param(
            "window_bits",
            format!("window width must be between 1 and {}", MAX_WINDOW_BITS),
        ));
    }
    let field = ops.field();
    let base = field.reduce(base);

    let mut table = Vec::with_capacity(1 << window_bits);
    let mut power = BigUint::one();
    for _ in 0..(1usize << window_bits) {
        table.push(field.to_limbs(&power));
        power = ops.mul(&power, &base);
    }

    let width = exp.bits().max(field.bits());
    let w = window_bits as u64;
    let windows = (width + w - 1) / w;

    let mut acc = BigUint::one();
    for d in (0..windows).rev() {
        for _ in 0..w {
            acc = ops.sqr(&acc);
        }
        let mut digit = 0usize;
        for j in (0..w).rev() {
            digit = (digit << 1) | exp.bit(d * w + j) as usize;
        }
        let entry = BigUint::new(ct_table_lookup(&table, digit));
        acc = ops.mul(&acc, &entry);
    }
    table.zeroize();
    Ok(acc)
}
