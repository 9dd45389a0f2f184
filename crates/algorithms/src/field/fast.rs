//! Variable-time field arithmetic for public operands

use std::borrow::Cow;
use std::mem;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use super::{FieldOps, PrimeField};
use crate::error::{Error, Result};

/// Field view with branching reductions and extended-Euclid inversion
///
/// Suitable for values an observer may learn anyway: curve constants,
/// public keys, signature components during verification.
#[derive(Clone, Copy, Debug)]
pub struct Fast<'a> {
    field: &'a PrimeField,
}

impl<'a> Fast<'a> {
    pub(crate) fn new(field: &'a PrimeField) -> Self {
        Self { field }
    }
}

/// Bring an operand into `[0, p)` without copying when it already is
pub(crate) fn canonical<'b>(field: &PrimeField, a: &'b BigUint) -> Cow<'b, BigUint> {
    if field.contains(a) {
        Cow::Borrowed(a)
    } else {
        Cow::Owned(field.reduce(a))
    }
}

impl FieldOps for Fast<'_> {
    fn field(&self) -> &PrimeField {
        self.field
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let p = self.field.modulus();
        let sum = &*canonical(self.field, a) + &*canonical(self.field, b);
        if &sum >= p {
            sum - p
        } else {
            sum
        }
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = canonical(self.field, a);
        let b = canonical(self.field, b);
        if *a >= *b {
            &*a - &*b
        } else {
            (&*a + self.field.modulus()) - &*b
        }
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.field.modulus()
    }

    fn invert(&self, a: &BigUint) -> Result<BigUint> {
        invert_euclid(a, self.field.modulus())
    }

    fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, self.field.modulus())
    }
}

/// `a⁻¹ mod n` by the extended Euclidean algorithm
///
/// Runs in time dependent on the operands. Fails with a modulus error when
/// `n` is even or zero, and with `NotInvertible` when `gcd(a, n) ≠ 1`.
pub fn invert_euclid(a: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() || n.is_even() {
        return Err(Error::modulus(
            "extended Euclid inversion",
            "modulus must be odd",
        ));
    }
    let a = a % n;
    if a.is_zero() {
        return Err(Error::NotInvertible {
            context: "extended Euclid inversion",
        });
    }

    let modulus = BigInt::from(n.clone());
    let mut r0 = modulus.clone();
    let mut r1 = BigInt::from(a);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        r0 = mem::replace(&mut r1, r2);
        let t2 = &t0 - &q * &t1;
        t0 = mem::replace(&mut t1, t2);
    }

    if !r0.is_one() {
        return Err(Error::NotInvertible {
            context: "extended Euclid inversion",
        });
    }

    t0.mod_floor(&modulus)
        .to_biguint()
        .ok_or(Error::Processing {
            operation: "extended Euclid inversion",
            details: "negative residue after reduction",
        })
}
