//! Constant-flow field arithmetic for secret operands
//!
//! Addition and subtraction compute the unreduced and the reduced candidate
//! over fixed-width limbs and pick one with a mask. Exponentiation runs a
//! Montgomery ladder over at least as many bits as the modulus has.

use num_bigint::BigUint;
use num_traits::Zero;
use subtle::Choice;

use ecprime_internal::constant_time::{
    ct_add_limbs, ct_select_limbs, ct_sub_limbs, wipe_limbs,
};

use super::exp::montgomery_ladder;
use super::fast::canonical;
use super::{FieldOps, PrimeField};
use crate::error::{Error, Result};

/// Field view whose control flow does not depend on operand values
#[derive(Clone, Copy, Debug)]
pub struct ConstantTime<'a> {
    field: &'a PrimeField,
}

impl<'a> ConstantTime<'a> {
    pub(crate) fn new(field: &'a PrimeField) -> Self {
        Self { field }
    }
}

impl FieldOps for ConstantTime<'_> {
    fn field(&self) -> &PrimeField {
        self.field
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let f = self.field;
        let width = f.limbs();
        let n = f.to_limbs(f.modulus());
        let la = f.to_limbs(&canonical(f, a));
        let lb = f.to_limbs(&canonical(f, b));

        let mut sum = vec![0u32; width];
        let carry = ct_add_limbs(&la, &lb, &mut sum);
        let mut diff = vec![0u32; width];
        let borrow = ct_sub_limbs(&sum, &n, &mut diff);

        // sum >= p exactly when the addition carried out or the subtraction did not borrow
        let reduce = Choice::from((carry | (borrow ^ 1)) as u8);
        let out = ct_select_limbs(&sum, &diff, reduce);
        wipe_limbs(&mut sum);
        wipe_limbs(&mut diff);
        BigUint::new(out)
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let f = self.field;
        let width = f.limbs();
        let n = f.to_limbs(f.modulus());
        let la = f.to_limbs(&canonical(f, a));
        let lb = f.to_limbs(&canonical(f, b));

        let mut diff = vec![0u32; width];
        let borrow = ct_sub_limbs(&la, &lb, &mut diff);
        let mut wrapped = vec![0u32; width];
        // carry out of this addition cancels the earlier borrow
        let _ = ct_add_limbs(&diff, &n, &mut wrapped);

        let out = ct_select_limbs(&diff, &wrapped, Choice::from(borrow as u8));
        wipe_limbs(&mut diff);
        wipe_limbs(&mut wrapped);
        BigUint::new(out)
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        // one multiplication and one reduction regardless of the values
        (a * b) % self.field.modulus()
    }

    fn invert(&self, a: &BigUint) -> Result<BigUint> {
        invert_fermat(a, self.field)
    }

    fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        let width = exp.bits().max(self.field.bits());
        montgomery_ladder(self, base, exp, width)
    }
}

/// `a⁻¹ = a^(p-2) mod p` by Fermat's little theorem
///
/// Correct only for prime `p`. The exponent is public and the ladder runs
/// over the full modulus width, so timing does not depend on `a`.
pub fn invert_fermat(a: &BigUint, field: &PrimeField) -> Result<BigUint> {
    let ops = ConstantTime::new(field);
    let exponent = field.modulus() - 2u32;
    let inv = montgomery_ladder(&ops, &canonical(field, a), &exponent, field.bits());
    if inv.is_zero() {
        return Err(Error::NotInvertible {
            context: "Fermat inversion",
        });
    }
    Ok(inv)
}
