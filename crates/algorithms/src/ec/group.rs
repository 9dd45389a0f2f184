//! Curve groups and the affine group law

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use subtle::Choice;

use ecprime_params::traditional::{curve_by_name, CurveParams, NAMED_CURVES};

use super::point::{
    fixed_width, AffinePoint, COMPRESSED_EVEN_TAG, COMPRESSED_ODD_TAG, INFINITY_TAG,
    UNCOMPRESSED_TAG,
};
use crate::error::{validate, Error, Result};
use crate::field::{invert_fermat, sqrt, FieldOps, PrimeField};

/// Witnesses for the Miller-Rabin test on curve moduli and orders
const PRIMALITY_WITNESSES: [u32; 24] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
];

/// Names of the built-in curves accepted by [`CurveGroup::named`]
pub fn named_curves() -> impl Iterator<Item = &'static str> {
    NAMED_CURVES.iter().map(|c| c.name)
}

/// A short-Weierstrass curve `y² = x³ + ax + b` over GF(p) with a generator
/// of prime order
///
/// Cloning yields an independent deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveGroup {
    name: String,
    field: PrimeField,
    a: BigUint,
    b: BigUint,
    generator: AffinePoint,
    order: BigUint,
    scalars: PrimeField,
    cofactor: BigUint,
}

impl CurveGroup {
    /// Look up a built-in curve by name (case-insensitive, common aliases accepted)
    pub fn named(name: &str) -> Result<Self> {
        let params = curve_by_name(name).ok_or_else(|| {
            Error::curve("named curve lookup", format!("unknown curve '{}'", name))
        })?;
        Self::from_params(params)
    }

    /// Materialize compiled-in parameters
    ///
    /// Runs the structural checks but trusts the stated order;
    /// call [`CurveGroup::validate`] for the full check.
    pub fn from_params(params: &CurveParams) -> Result<Self> {
        let group = Self::assemble(
            params.name,
            validate::hex_integer(params.p, "p")?,
            validate::hex_integer(params.a, "a")?,
            validate::hex_integer(params.b, "b")?,
            AffinePoint::from_hex(params.gx, params.gy)?,
            validate::hex_integer(params.n, "n")?,
            validate::hex_integer(params.h, "h")?,
        )?;
        group.check_structure()?;
        Ok(group)
    }

    /// Build a curve from explicit parameters and fully validate it
    pub fn new(
        name: &str,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: AffinePoint,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        let group = Self::assemble(name, p, a, b, generator, order, cofactor)?;
        group.validate()?;
        Ok(group)
    }

    fn assemble(
        name: &str,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: AffinePoint,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        let field = PrimeField::new(p)?;
        let scalars = PrimeField::new(order.clone()).map_err(|_| {
            Error::curve("curve parameters", "group order must be an odd integer above 2")
        })?;
        Ok(Self {
            name: name.to_string(),
            field,
            a,
            b,
            generator,
            order,
            scalars,
            cofactor,
        })
    }

    /// Checks that need no scalar multiplication: coefficient ranges,
    /// non-singularity, generator on the curve, non-zero cofactor
    fn check_structure(&self) -> Result<()> {
        let p = self.field.modulus();
        validate::below(&self.a, p, "a")?;
        validate::below(&self.b, p, "b")?;

        // 4a³ + 27b² ≢ 0
        let ops = self.field.fast();
        let a3 = ops.mul(&ops.sqr(&self.a), &self.a);
        let b2 = ops.sqr(&self.b);
        let disc = ops.add(&ops.mul4(&a3), &ops.mul_u64(&b2, 27));
        if disc.is_zero() {
            return Err(Error::curve("curve parameters", "curve is singular"));
        }

        if self.generator.is_infinity() {
            return Err(Error::curve("curve parameters", "generator is the point at infinity"));
        }
        if !self.is_on_curve(&self.generator) {
            return Err(Error::curve("curve parameters", "generator is not on the curve"));
        }
        if self.cofactor.is_zero() {
            return Err(Error::curve("curve parameters", "cofactor must be positive"));
        }
        Ok(())
    }

    /// Full validation: structure, primality of p and n, and `n·G = O`
    pub fn validate(&self) -> Result<()> {
        self.check_structure()?;
        if !is_probable_prime(self.field.modulus()) {
            return Err(Error::curve("curve parameters", "field modulus is not prime"));
        }
        if !is_probable_prime(&self.order) {
            return Err(Error::curve("curve parameters", "group order is not prime"));
        }
        if !self.mul_projective(&self.order, &self.generator)?.is_infinity() {
            return Err(Error::curve(
                "curve parameters",
                "generator order does not match the stated order",
            ));
        }
        Ok(())
    }

    /// Curve identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base field
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Field prime p
    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    /// Coefficient a
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Generator G
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Order n of the generator
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// GF(n), for arithmetic on scalars
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalars
    }

    /// Cofactor h
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Bit length of n
    pub fn order_bits(&self) -> u64 {
        self.scalars.bits()
    }

    /// Byte length of a coordinate
    pub fn field_bytes(&self) -> usize {
        self.field.byte_len()
    }

    /// `x³ + ax + b`
    fn rhs(&self, x: &BigUint) -> BigUint {
        let ops = self.field.fast();
        let x3 = ops.mul(&ops.sqr(x), x);
        let ax = ops.mul(&self.a, x);
        ops.add_add(&x3, &ax, &self.b)
    }

    /// Whether `y² ≡ x³ + ax + b` with both coordinates reduced
    ///
    /// The point at infinity is a group element and passes.
    pub fn is_on_curve(&self, p: &AffinePoint) -> bool {
        if p.is_infinity() {
            return true;
        }
        if !self.field.contains(p.x()) || !self.field.contains(p.y()) {
            return false;
        }
        self.field.fast().sqr(p.y()) == self.rhs(p.x())
    }

    /// Infinity equals only infinity; finite points compare coordinates
    pub fn is_equal(&self, p: &AffinePoint, q: &AffinePoint) -> bool {
        p == q
    }

    /// Whether `p = -q`
    pub fn is_inverse(&self, p: &AffinePoint, q: &AffinePoint) -> bool {
        if p.is_infinity() || q.is_infinity() {
            return p.is_infinity() && q.is_infinity();
        }
        p.x() == q.x() && *p.y() == self.field.fast().neg(q.y())
    }

    /// `-p`
    pub fn negate(&self, p: &AffinePoint) -> AffinePoint {
        if p.is_infinity() {
            return AffinePoint::infinity();
        }
        AffinePoint::new(p.x().clone(), self.field.fast().neg(p.y()))
    }

    /// `p + q` by the chord-and-tangent rule
    pub fn add(&self, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint> {
        if p.is_infinity() {
            return Ok(q.clone());
        }
        if q.is_infinity() {
            return Ok(p.clone());
        }
        if self.is_inverse(p, q) {
            return Ok(AffinePoint::infinity());
        }
        if p == q {
            return self.double(p);
        }

        let ops = self.field.fast();
        let num = ops.sub(p.y(), q.y());
        let den = ops.sub(p.x(), q.x());
        let lambda = ops.div(&num, &den)?;
        Ok(self.chord(&lambda, p, q))
    }

    /// `2p` with the tangent slope `(3x² + a) / 2y`
    pub fn double(&self, p: &AffinePoint) -> Result<AffinePoint> {
        if p.is_infinity() || p.y().is_zero() {
            return Ok(AffinePoint::infinity());
        }
        let ops = self.field.fast();
        let num = ops.add(&ops.mul_u64(&ops.sqr(p.x()), 3), &self.a);
        let den = ops.add(p.y(), p.y());
        let lambda = ops.div(&num, &den)?;
        Ok(self.chord(&lambda, p, p))
    }

    /// `p + q` with one instruction sequence for addition and doubling
    ///
    /// Both slope candidates are computed every time and one is picked by a
    /// mask. Only the neutral-element and inverse cases branch.
    pub fn add_atomic(&self, p: &AffinePoint, q: &AffinePoint) -> Result<AffinePoint> {
        if p.is_infinity() {
            return Ok(q.clone());
        }
        if q.is_infinity() {
            return Ok(p.clone());
        }
        if self.is_inverse(p, q) {
            return Ok(AffinePoint::infinity());
        }

        let f = &self.field;
        let ops = f.ct();
        let same: Choice = f.ct_eq(p.x(), q.x()) & f.ct_eq(p.y(), q.y());

        let x_sq = ops.sqr(p.x());
        let num_dbl = ops.add_add(&ops.add(&x_sq, &x_sq), &x_sq, &self.a);
        let den_dbl = ops.add(p.y(), p.y());
        let num_add = ops.sub(p.y(), q.y());
        let den_add = ops.sub(p.x(), q.x());

        let num = f.ct_select(&num_add, &num_dbl, same);
        let den = f.ct_select(&den_add, &den_dbl, same);
        let lambda = ops.mul(&num, &invert_fermat(&den, f)?);

        let x3 = ops.sub_sub(&ops.sqr(&lambda), p.x(), q.x());
        let y3 = ops.mul_sub(&lambda, &ops.sub(p.x(), &x3), p.y());
        Ok(AffinePoint::new(x3, y3))
    }

    /// `x₃ = λ² - x_p - x_q`, `y₃ = λ(x_p - x₃) - y_p`
    fn chord(&self, lambda: &BigUint, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        let ops = self.field.fast();
        let x3 = ops.sub_sub(&ops.sqr(lambda), p.x(), q.x());
        let y3 = ops.mul_sub(lambda, &ops.sub(p.x(), &x3), p.y());
        AffinePoint::new(x3, y3)
    }

    /// SEC1 compressed encoding: parity tag followed by fixed-width x
    pub fn compress(&self, p: &AffinePoint) -> Result<Vec<u8>> {
        if p.is_infinity() {
            return Err(Error::point("point compression", "cannot compress the point at infinity"));
        }
        let tag = if p.y_is_odd() {
            COMPRESSED_ODD_TAG
        } else {
            COMPRESSED_EVEN_TAG
        };
        let mut out = Vec::with_capacity(1 + self.field_bytes());
        out.push(tag);
        out.extend_from_slice(&fixed_width(p.x(), self.field_bytes()));
        Ok(out)
    }

    /// [`CurveGroup::compress`] as a lowercase hex string
    pub fn compress_hex(&self, p: &AffinePoint) -> Result<String> {
        Ok(hex::encode(self.compress(p)?))
    }

    /// Recover a point from its compressed encoding
    pub fn decompress(&self, bytes: &[u8]) -> Result<AffinePoint> {
        validate::length("compressed point", bytes.len(), 1 + self.field_bytes())?;
        let odd = match bytes[0] {
            COMPRESSED_EVEN_TAG => false,
            COMPRESSED_ODD_TAG => true,
            _ => {
                return Err(Error::point(
                    "point decompression",
                    "compressed point tag must be 02 or 03",
                ))
            }
        };
        let x = BigUint::from_bytes_be(&bytes[1..]);
        if !self.field.contains(&x) {
            return Err(Error::point("point decompression", "x-coordinate is not reduced"));
        }

        let y = sqrt(&self.field, &self.rhs(&x))
            .ok_or_else(|| Error::point("point decompression", "x is not on the curve"))?;
        let y = if y.bit(0) == odd {
            y
        } else {
            self.field.fast().neg(&y)
        };
        if y.is_zero() && odd {
            return Err(Error::point("point decompression", "no root with the requested parity"));
        }
        Ok(AffinePoint::new(x, y))
    }

    /// [`CurveGroup::decompress`] from a hex string
    pub fn decompress_hex(&self, encoded: &str) -> Result<AffinePoint> {
        let bytes = hex::decode(encoded.trim())
            .map_err(|_| Error::param("compressed point", "not a hex string"))?;
        self.decompress(&bytes)
    }

    /// Parse the SEC1 uncompressed encoding, or the single byte `00` for infinity
    ///
    /// The decoded point must satisfy the curve equation.
    pub fn from_uncompressed(&self, bytes: &[u8]) -> Result<AffinePoint> {
        if bytes.len() == 1 && bytes[0] == INFINITY_TAG {
            return Ok(AffinePoint::infinity());
        }
        let width = self.field_bytes();
        validate::length("uncompressed point", bytes.len(), 1 + 2 * width)?;
        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(Error::point(
                "uncompressed point",
                "uncompressed point tag must be 04",
            ));
        }
        let point = AffinePoint::new(
            BigUint::from_bytes_be(&bytes[1..1 + width]),
            BigUint::from_bytes_be(&bytes[1 + width..]),
        );
        if !self.is_on_curve(&point) {
            return Err(Error::point("uncompressed point", "point is not on the curve"));
        }
        Ok(point)
    }

    /// SEC1 uncompressed encoding of `p` at this curve's coordinate width
    pub fn to_uncompressed(&self, p: &AffinePoint) -> Vec<u8> {
        p.to_uncompressed(self.field_bytes())
    }
}

impl fmt::Display for CurveGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "curve {}", self.name)?;
        writeln!(f, "  p = {:x}", self.field.modulus())?;
        writeln!(f, "  a = {:x}", self.a)?;
        writeln!(f, "  b = {:x}", self.b)?;
        writeln!(f, "  G = {}", self.generator)?;
        writeln!(f, "  n = {:x}", self.order)?;
        write!(f, "  h = {:x}", self.cofactor)
    }
}

/// Miller-Rabin with fixed small-prime witnesses
///
/// Suitable for vetting curve parameters, not for generating primes.
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    for &w in PRIMALITY_WITNESSES.iter() {
        let w = BigUint::from(w);
        if *n == w {
            return true;
        }
        if (n % &w).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &w in PRIMALITY_WITNESSES.iter() {
        let mut x = BigUint::from(w).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
