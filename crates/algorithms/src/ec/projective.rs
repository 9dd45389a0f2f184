//! Jacobian coordinates
//!
//! `(X, Y, Z)` represents the affine point `(X/Z², Y/Z³)`; `Z = 0` is the
//! point at infinity. Intermediate results stay projective so a scalar
//! multiplication needs a single inversion, in [`ProjectivePoint::to_affine`].
//! Arithmetic uses the constant-time field view throughout.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use subtle::Choice;

use super::{AffinePoint, CurveGroup};
use crate::error::Result;
use crate::field::{invert_fermat, FieldOps};

/// A point in Jacobian coordinates
#[derive(Clone, Debug)]
pub struct ProjectivePoint {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl ProjectivePoint {
    /// The point at infinity `(1, 1, 0)`
    pub fn identity() -> Self {
        Self {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Lift an affine point with `Z = 1`
    pub fn from_affine(p: &AffinePoint) -> Self {
        if p.is_infinity() {
            return Self::identity();
        }
        Self {
            x: p.x().clone(),
            y: p.y().clone(),
            z: BigUint::one(),
        }
    }

    /// Whether `Z = 0`
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Projective coordinates `(X, Y, Z)`
    pub fn coordinates(&self) -> (&BigUint, &BigUint, &BigUint) {
        (&self.x, &self.y, &self.z)
    }

    /// `2P` in Jacobian coordinates, valid for any `a`
    ///
    /// `S = 4XY²`, `M = 3X² + aZ⁴`, `X' = M² - 2S`,
    /// `Y' = M(S - X') - 8Y⁴`, `Z' = 2YZ`. The identity and points with
    /// `Y = 0` map to `Z' = 0` without a branch.
    pub fn double(&self, group: &CurveGroup) -> Self {
        let ops = group.field().ct();
        let xx = ops.sqr(&self.x);
        let yy = ops.sqr(&self.y);
        let yyyy = ops.sqr(&yy);
        let zz = ops.sqr(&self.z);

        let s = ops.mul4(&ops.mul(&self.x, &yy));
        let m = ops.add(&ops.mul_u64(&xx, 3), &ops.mul(group.a(), &ops.sqr(&zz)));
        let x3 = ops.sub_sub(&ops.sqr(&m), &s, &s);
        let y3 = ops.sub(&ops.mul(&m, &ops.sub(&s, &x3)), &ops.mul8(&yyyy));
        let yz = ops.mul(&self.y, &self.z);
        let z3 = ops.add(&yz, &yz);

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// `P + Q` in Jacobian coordinates
    ///
    /// Falls back to doubling when the inputs coincide.
    pub fn add(&self, other: &Self, group: &CurveGroup) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let ops = group.field().ct();
        let z1z1 = ops.sqr(&self.z);
        let z2z2 = ops.sqr(&other.z);
        let u1 = ops.mul(&self.x, &z2z2);
        let u2 = ops.mul(&other.x, &z1z1);
        let s1 = ops.mul(&self.y, &ops.mul(&z2z2, &other.z));
        let s2 = ops.mul(&other.y, &ops.mul(&z1z1, &self.z));

        let h = ops.sub(&u2, &u1);
        let r = ops.sub(&s2, &s1);
        if h.is_zero() {
            if r.is_zero() {
                return self.double(group);
            }
            return Self::identity();
        }

        let hh = ops.sqr(&h);
        let hhh = ops.mul(&hh, &h);
        let v = ops.mul(&u1, &hh);

        let x3 = ops.sub_sub(&ops.sub(&ops.sqr(&r), &hhh), &v, &v);
        let y3 = ops.sub(&ops.mul(&r, &ops.sub(&v, &x3)), &ops.mul(&s1, &hhh));
        let z3 = ops.mul(&ops.mul(&self.z, &other.z), &h);

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Back to affine coordinates with one Fermat inversion of Z
    pub fn to_affine(&self, group: &CurveGroup) -> Result<AffinePoint> {
        if self.is_identity() {
            return Ok(AffinePoint::infinity());
        }
        let field = group.field();
        let ops = field.ct();
        let z_inv = invert_fermat(&self.z, field)?;
        let z_inv2 = ops.sqr(&z_inv);
        let z_inv3 = ops.mul(&z_inv2, &z_inv);
        Ok(AffinePoint::new(
            ops.mul(&self.x, &z_inv2),
            ops.mul(&self.y, &z_inv3),
        ))
    }

    /// Exchange `a` and `b` when `choice` is set, touching every coordinate limb
    pub(crate) fn ct_swap(group: &CurveGroup, a: &mut Self, b: &mut Self, choice: Choice) {
        let field = group.field();
        field.ct_swap(&mut a.x, &mut b.x, choice);
        field.ct_swap(&mut a.y, &mut b.y, choice);
        field.ct_swap(&mut a.z, &mut b.z, choice);
    }

    /// Coordinates as one fixed-width limb row for table scans
    pub(crate) fn to_limb_row(&self, group: &CurveGroup) -> Vec<u32> {
        let field = group.field();
        let mut row = field.to_limbs(&self.x);
        row.extend(field.to_limbs(&self.y));
        row.extend(field.to_limbs(&self.z));
        row
    }

    /// Inverse of [`ProjectivePoint::to_limb_row`]
    pub(crate) fn from_limb_row(row: &[u32], group: &CurveGroup) -> Self {
        let w = group.field().limbs();
        Self {
            x: BigUint::new(row[..w].to_vec()),
            y: BigUint::new(row[w..2 * w].to_vec()),
            z: BigUint::new(row[2 * w..3 * w].to_vec()),
        }
    }
}
