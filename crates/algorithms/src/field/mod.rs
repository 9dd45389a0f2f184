//! Arithmetic in prime fields GF(p) over arbitrary-precision integers
//!
//! A [`PrimeField`] owns the modulus. Arithmetic goes through one of two
//! views implementing [`FieldOps`]:
//!
//! - [`Fast`]: plain reduce-after-operate arithmetic and extended-Euclid
//!   inversion, for public operands.
//! - [`ConstantTime`]: fixed-width limb addition and subtraction with masked
//!   final reduction, Fermat inversion, and ladder exponentiation whose
//!   iteration count depends only on the modulus width. Use it whenever an
//!   operand is secret.
//!
//! Both views compute the same function; only the control flow differs.
//!
//! Operands are expected to be reduced (`0 <= a < p`).

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use subtle::Choice;

use ecprime_internal::constant_time::{ct_eq_choice, ct_select_limbs, ct_swap_limbs};

use crate::error::{validate, Error, Result};

mod exp;
mod fast;
mod secure;
mod sqrt;

pub use exp::{
    pow_always_multiply, pow_atomic, pow_montgomery, pow_montgomery_randomized, pow_window,
    DEFAULT_WINDOW_BITS,
};
pub use fast::{invert_euclid, Fast};
pub use secure::{invert_fermat, ConstantTime};
pub use sqrt::{is_square, sqrt};

/// Prime field GF(p) described by its modulus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    bits: u64,
    limbs: usize,
}

impl PrimeField {
    /// Create a field from an odd modulus greater than 2
    ///
    /// Primality is not checked here; [`crate::ec::CurveGroup::validate`]
    /// runs a probabilistic test on curve parameters.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus <= BigUint::from(2u32) {
            return Err(Error::modulus(
                "prime field",
                "modulus must be greater than 2",
            ));
        }
        if modulus.is_even() {
            return Err(Error::modulus("prime field", "modulus must be odd"));
        }
        let bits = modulus.bits();
        let limbs = ((bits + 31) / 32) as usize;
        Ok(Self {
            modulus,
            bits,
            limbs,
        })
    }

    /// Create a field from a big-endian base-16 modulus
    pub fn from_hex(modulus: &str) -> Result<Self> {
        Self::new(validate::hex_integer(modulus, "modulus")?)
    }

    /// The modulus p
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of p
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Byte length of a field element in fixed-width encodings
    pub fn byte_len(&self) -> usize {
        ((self.bits + 7) / 8) as usize
    }

    /// Number of 32-bit limbs used by constant-time operations
    pub fn limbs(&self) -> usize {
        self.limbs
    }

    /// Reduce an arbitrary integer into `[0, p)`
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    /// Whether `a` is a canonical element (`a < p`)
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    /// Whether `a ≡ 0 (mod p)`
    pub fn is_zero(&self, a: &BigUint) -> bool {
        (a % &self.modulus).is_zero()
    }

    /// The multiplicative identity
    pub fn one(&self) -> BigUint {
        BigUint::one()
    }

    /// Variable-time view for public operands
    pub fn fast(&self) -> Fast<'_> {
        Fast::new(self)
    }

    /// Constant-flow view for secret operands
    pub fn ct(&self) -> ConstantTime<'_> {
        ConstantTime::new(self)
    }

    /// Fixed-width big-endian encoding of a field element
    pub fn to_bytes_be(&self, a: &BigUint) -> Vec<u8> {
        let raw = a.to_bytes_be();
        let width = self.byte_len().max(raw.len());
        let mut out = vec![0u8; width - raw.len()];
        out.extend_from_slice(&raw);
        out
    }

    /// Little-endian limbs of `a`, zero-padded to the field width
    pub(crate) fn to_limbs(&self, a: &BigUint) -> Vec<u32> {
        let mut limbs = a.to_u32_digits();
        limbs.resize(self.limbs.max(limbs.len()), 0);
        limbs
    }

    /// Swap `a` and `b` when `choice` is set, touching every limb of both
    pub(crate) fn ct_swap(&self, a: &mut BigUint, b: &mut BigUint, choice: Choice) {
        let mut la = self.to_limbs(a);
        let mut lb = self.to_limbs(b);
        let width = la.len().max(lb.len());
        la.resize(width, 0);
        lb.resize(width, 0);
        ct_swap_limbs(&mut la, &mut lb, choice);
        *a = BigUint::new(la);
        *b = BigUint::new(lb);
    }

    /// `a` when `choice` is 0, `b` when it is 1
    pub(crate) fn ct_select(&self, a: &BigUint, b: &BigUint, choice: Choice) -> BigUint {
        let mut la = self.to_limbs(a);
        let mut lb = self.to_limbs(b);
        let width = la.len().max(lb.len());
        la.resize(width, 0);
        lb.resize(width, 0);
        BigUint::new(ct_select_limbs(&la, &lb, choice))
    }

    /// Equality of two canonical elements over their fixed-width encodings
    pub(crate) fn ct_eq(&self, a: &BigUint, b: &BigUint) -> Choice {
        ct_eq_choice(self.to_bytes_be(a), self.to_bytes_be(b))
    }
}

/// Modular arithmetic over a [`PrimeField`]
///
/// Implementors supply the primitive operations; the compound helpers are
/// written in terms of them so both views share one definition.
pub trait FieldOps {
    /// The field this view operates in
    fn field(&self) -> &PrimeField;

    /// `a + b mod p`
    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint;

    /// `a - b mod p`
    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint;

    /// `a · b mod p`
    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint;

    /// `a⁻¹ mod p`; fails for `a ≡ 0`
    fn invert(&self, a: &BigUint) -> Result<BigUint>;

    /// `base^exp mod p`
    fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint;

    /// `-a mod p`
    fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// `a² mod p`
    fn sqr(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// `a + b + c mod p`
    fn add_add(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        let t = self.add(a, b);
        self.add(&t, c)
    }

    /// `a - b - c mod p`
    fn sub_sub(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        let t = self.sub(a, b);
        self.sub(&t, c)
    }

    /// `a · b - c mod p`
    fn mul_sub(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        let t = self.mul(a, b);
        self.sub(&t, c)
    }

    /// `a · k mod p` for a small constant
    fn mul_u64(&self, a: &BigUint, k: u64) -> BigUint {
        let k = self.field().reduce(&BigUint::from(k));
        self.mul(a, &k)
    }

    /// `4a mod p` by two doublings
    fn mul4(&self, a: &BigUint) -> BigUint {
        let t = self.add(a, a);
        self.add(&t, &t)
    }

    /// `8a mod p` by three doublings
    fn mul8(&self, a: &BigUint) -> BigUint {
        let t = self.mul4(a);
        self.add(&t, &t)
    }

    /// `a / b mod p`
    fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint> {
        let inv = self.invert(b)?;
        Ok(self.mul(a, &inv))
    }
}

#[cfg(test)]
mod tests;
