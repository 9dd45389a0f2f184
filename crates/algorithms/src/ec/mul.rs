//! Scalar multiplication strategies
//!
//! Every strategy computes the same `k·P`; they differ in the sequence of
//! group operations an observer can see. Multiplying the point at infinity
//! or by zero yields the point at infinity.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::Zeroize;

use ecprime_internal::constant_time::ct_table_lookup;

use super::{AffinePoint, CurveGroup, ProjectivePoint};
use crate::error::{Error, Result};
use crate::field::DEFAULT_WINDOW_BITS;

/// Largest supported window for [`CurveGroup::mul_windowed`]
const MAX_WINDOW_BITS: usize = 6;

/// Selects a scalar multiplication algorithm at runtime
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScalarMulStrategy {
    /// Atomic double-and-add over affine points
    Atomic,
    /// Affine Montgomery ladder
    Montgomery,
    /// Affine Montgomery ladder with random register assignment
    RandomizedMontgomery,
    /// Fixed window over Jacobian points with a scanned table
    Windowed {
        /// Window width in bits
        window_bits: usize,
    },
    /// Jacobian Montgomery ladder with masked swaps
    #[default]
    Projective,
}

impl fmt::Display for ScalarMulStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarMulStrategy::Atomic => write!(f, "atomic"),
            ScalarMulStrategy::Montgomery => write!(f, "montgomery"),
            ScalarMulStrategy::RandomizedMontgomery => write!(f, "randomized-montgomery"),
            ScalarMulStrategy::Windowed { window_bits } => write!(f, "windowed-{}", window_bits),
            ScalarMulStrategy::Projective => write!(f, "projective"),
        }
    }
}

impl ScalarMulStrategy {
    /// Every strategy, with the default window for the windowed method
    pub const ALL: [ScalarMulStrategy; 5] = [
        ScalarMulStrategy::Atomic,
        ScalarMulStrategy::Montgomery,
        ScalarMulStrategy::RandomizedMontgomery,
        ScalarMulStrategy::Windowed {
            window_bits: DEFAULT_WINDOW_BITS,
        },
        ScalarMulStrategy::Projective,
    ];
}

impl CurveGroup {
    /// `k·P` with the chosen strategy; `rng` is drawn from only by the
    /// randomized ladder
    pub fn mul_with<R: RngCore + CryptoRng + ?Sized>(
        &self,
        strategy: ScalarMulStrategy,
        k: &BigUint,
        p: &AffinePoint,
        rng: &mut R,
    ) -> Result<AffinePoint> {
        match strategy {
            ScalarMulStrategy::Atomic => self.mul_atomic(k, p),
            ScalarMulStrategy::Montgomery => self.mul_montgomery(k, p),
            ScalarMulStrategy::RandomizedMontgomery => self.mul_randomized(k, p, rng),
            ScalarMulStrategy::Windowed { window_bits } => self.mul_windowed(k, p, window_bits),
            ScalarMulStrategy::Projective => self.mul_projective(k, p),
        }
    }

    /// `k·G`
    pub fn mul_generator<R: RngCore + CryptoRng + ?Sized>(
        &self,
        strategy: ScalarMulStrategy,
        k: &BigUint,
        rng: &mut R,
    ) -> Result<AffinePoint> {
        self.mul_with(strategy, k, self.generator(), rng)
    }

    /// Atomic double-and-add
    ///
    /// One [`CurveGroup::add_atomic`] per iteration: `R0 ← R0 + R[b]` with
    /// `R[1] = P`, so the same call doubles when `b = 0` and adds when
    /// `b = 1`. A one-bit takes two iterations.
    pub fn mul_atomic(&self, k: &BigUint, p: &AffinePoint) -> Result<AffinePoint> {
        if let Some(trivial) = self.trivial_product(k, p)? {
            return Ok(trivial);
        }
        let mut r = [AffinePoint::infinity(), p.clone()];
        let mut b = 0usize;
        let mut i = k.bits() as i64 - 1;
        while i >= 0 {
            r[0] = self.add_atomic(&r[0], &r[b])?;
            b ^= k.bit(i as u64) as usize;
            i -= 1 - b as i64;
        }
        let [result, _] = r;
        Ok(result)
    }

    /// Affine Montgomery ladder keeping `R1 = R0 + P`
    pub fn mul_montgomery(&self, k: &BigUint, p: &AffinePoint) -> Result<AffinePoint> {
        if let Some(trivial) = self.trivial_product(k, p)? {
            return Ok(trivial);
        }
        let mut r = [AffinePoint::infinity(), p.clone()];
        for i in (0..k.bits()).rev() {
            let b = k.bit(i) as usize;
            r[1 - b] = self.add_atomic(&r[b], &r[1 - b])?;
            r[b] = self.add_atomic(&r[b], &r[b])?;
        }
        let [result, _] = r;
        Ok(result)
    }

    /// Montgomery ladder whose register roles are re-drawn from `rng`
    ///
    /// A fresh random bit is taken whenever the scalar bit disagrees with
    /// the current assignment.
    pub fn mul_randomized<R: RngCore + CryptoRng + ?Sized>(
        &self,
        k: &BigUint,
        p: &AffinePoint,
        rng: &mut R,
    ) -> Result<AffinePoint> {
        if let Some(trivial) = self.trivial_product(k, p)? {
            return Ok(trivial);
        }
        let mut rb = (rng.next_u32() & 1) as usize;
        let mut r = [
            AffinePoint::infinity(),
            if rb == 0 {
                p.clone()
            } else {
                AffinePoint::infinity()
            },
        ];
        for i in (0..k.bits()).rev() {
            let bit = k.bit(i) as usize;
            if bit ^ rb == 1 {
                rb = (rng.next_u32() & 1) as usize;
            }
            r[rb] = self.add_atomic(&r[0], &r[rb ^ bit])?;
            r[rb ^ 1] = self.add_atomic(&r[rb], p)?;
        }
        let [result, _] = r;
        Ok(result)
    }

    /// Fixed-window multiplication over Jacobian points
    ///
    /// Precomputes `0·P .. (2^w - 1)·P` and reads one entry per window by
    /// scanning the whole table, so the access pattern is independent of
    /// the digits. The window count is fixed by `max(bits(k), bits(n))`.
    pub fn mul_windowed(&self, k: &BigUint, p: &AffinePoint, window_bits: usize) -> Result<AffinePoint> {
        if window_bits == 0 || window_bits > MAX_WINDOW_BITS {
            return Err(Error::param(
                "window_bits",
                format!("window width must be between 1 and {}", MAX_WINDOW_BITS),
            ));
        }
        if let Some(trivial) = self.trivial_product(k, p)? {
            return Ok(trivial);
        }

        let base = ProjectivePoint::from_affine(p);
        let mut table = Vec::with_capacity(1 << window_bits);
        let mut multiple = ProjectivePoint::identity();
        for _ in 0..(1usize << window_bits) {
            table.push(multiple.to_limb_row(self));
            multiple = multiple.add(&base, self);
        }

        let w = window_bits as u64;
        let width = k.bits().max(self.order_bits());
        let windows = (width + w - 1) / w;

        let mut acc = ProjectivePoint::identity();
        for d in (0..windows).rev() {
            for _ in 0..w {
                acc = acc.double(self);
            }
            let mut digit = 0usize;
            for j in (0..w).rev() {
                digit = (digit << 1) | k.bit(d * w + j) as usize;
            }
            let entry = ProjectivePoint::from_limb_row(&ct_table_lookup(&table, digit), self);
            acc = acc.add(&entry, self);
        }
        table.zeroize();
        acc.to_affine(self)
    }

    /// Jacobian Montgomery ladder
    ///
    /// Runs over `max(bits(k), bits(n))` bits; the registers are exchanged
    /// with masked swaps around each add-and-double step.
    pub fn mul_projective(&self, k: &BigUint, p: &AffinePoint) -> Result<AffinePoint> {
        if let Some(trivial) = self.trivial_product(k, p)? {
            return Ok(trivial);
        }
        let mut r0 = ProjectivePoint::identity();
        let mut r1 = ProjectivePoint::from_affine(p);
        let width = k.bits().max(self.order_bits());
        for i in (0..width).rev() {
            let choice = Choice::from(k.bit(i) as u8);
            ProjectivePoint::ct_swap(self, &mut r0, &mut r1, choice);
            r1 = r0.add(&r1, self);
            r0 = r0.double(self);
            ProjectivePoint::ct_swap(self, &mut r0, &mut r1, choice);
        }
        r0.to_affine(self)
    }

    /// `u1·G + u2·Q` for public scalars, by Shamir's simultaneous method
    ///
    /// Variable time; meant for signature verification.
    pub fn mul_add_public(&self, u1: &BigUint, u2: &BigUint, q: &AffinePoint) -> Result<AffinePoint> {
        self.check_operand(q)?;
        let g = ProjectivePoint::from_affine(self.generator());
        let q = ProjectivePoint::from_affine(q);
        let gq = g.add(&q, self);

        let mut acc = ProjectivePoint::identity();
        for i in (0..u1.bits().max(u2.bits())).rev() {
            acc = acc.double(self);
            match (u1.bit(i), u2.bit(i)) {
                (true, true) => acc = acc.add(&gq, self),
                (true, false) => acc = acc.add(&g, self),
                (false, true) => acc = acc.add(&q, self),
                (false, false) => {}
            }
        }
        acc.to_affine(self)
    }

    /// Handle `k = 0` and `P = O`, and reject unreduced coordinates
    fn trivial_product(&self, k: &BigUint, p: &AffinePoint) -> Result<Option<AffinePoint>> {
        self.check_operand(p)?;
        if p.is_infinity() || k.is_zero() {
            return Ok(Some(AffinePoint::infinity()));
        }
        Ok(None)
    }

    fn check_operand(&self, p: &AffinePoint) -> Result<()> {
        if !p.is_infinity() && !(self.field().contains(p.x()) && self.field().contains(p.y())) {
            return Err(Error::point(
                "scalar multiplication",
                "coordinates are not reduced modulo p",
            ));
        }
        Ok(())
    }
}
