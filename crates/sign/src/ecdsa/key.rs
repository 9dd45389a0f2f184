//! ECDSA key management
//!
//! A [`KeyPair`] owns its curve group, a public point `Q` and optionally the
//! private scalar `d` with `Q = d·G`. Cloning a key pair is a deep copy; no
//! state is shared between copies.
//!
//! Private keys are drawn with the extra-random-bits method of FIPS 186-4,
//! Appendix B.4.1, and public keys are checked with the full public-key
//! validation routine of SP 800-56A Rev. 3, Section 5.6.2.3.3.

use core::fmt;

use ecprime_algorithms::{validate, AffinePoint, CurveGroup};
use ecprime_internal::constant_time::ct_eq;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// Random bits drawn beyond the width of the order
const EXTRA_RANDOM_BITS: u64 = 64;

/// A secret scalar held as fixed-width big-endian bytes
///
/// The bytes are wiped when the value is dropped. `Debug` never prints them.
#[derive(Clone)]
pub struct SecretScalar {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretScalar {
    /// Encode `value` left-padded to `width` bytes
    pub fn from_biguint(value: &BigUint, width: usize) -> Self {
        let raw = Zeroizing::new(value.to_bytes_be());
        let mut bytes = Zeroizing::new(vec![0u8; width.saturating_sub(raw.len())]);
        bytes.extend_from_slice(&raw);
        SecretScalar { bytes }
    }

    /// Big-endian bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The scalar as an integer
    ///
    /// The returned value is not wiped; keep it short-lived.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Lowercase hex of the fixed-width bytes
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.bytes.as_slice()))
    }

    /// Whether the scalar is zero
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().fold(0u8, |acc, &b| acc | b) == 0
    }
}

impl Zeroize for SecretScalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SecretScalar {}

impl PartialEq for SecretScalar {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.len() == other.bytes.len() && ct_eq(self.as_bytes(), other.as_bytes())
    }
}

impl Eq for SecretScalar {}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretScalar([REDACTED])")
    }
}

/// Draw a private key `d ∈ [1, n-1]`
///
/// FIPS 186-4, Appendix B.4.1:
/// 1. c = a random integer of bitlen(n) + 64 bits
/// 2. d = (c mod (n-1)) + 1
pub fn generate_private_key<R: RngCore + CryptoRng + ?Sized>(
    group: &CurveGroup,
    rng: &mut R,
) -> Result<SecretScalar> {
    let n = group.order();
    if n.bits() < 2 {
        return Err(Error::curve("private key generation", "group order below 2"));
    }
    let n_minus_one = n - 1u32;
    let c = rng.gen_biguint(group.order_bits() + EXTRA_RANDOM_BITS);
    let d = (c % &n_minus_one) + 1u32;
    Ok(SecretScalar::from_biguint(&d, group.scalar_field().byte_len()))
}

/// `Q = d·G` with the atomic ladder
pub fn derive_public_key(group: &CurveGroup, d: &BigUint) -> Result<AffinePoint> {
    check_private_range(group, d)?;
    Ok(group.mul_atomic(d, group.generator())?)
}

/// Full public-key validation
///
/// `Q` must be finite, have coordinates in `[0, p)`, satisfy the curve
/// equation and have `n·Q = O`.
pub fn validate_public_key(group: &CurveGroup, q: &AffinePoint) -> Result<()> {
    const CONTEXT: &str = "public key validation";
    if q.is_infinity() {
        return Err(Error::key(CONTEXT, "public key is the point at infinity"));
    }
    if !group.field().contains(q.x()) || !group.field().contains(q.y()) {
        return Err(Error::key(CONTEXT, "coordinates are not reduced modulo p"));
    }
    if !group.is_on_curve(q) {
        return Err(Error::key(CONTEXT, "point is not on the curve"));
    }
    if !group.mul_projective(group.order(), q)?.is_infinity() {
        return Err(Error::key(CONTEXT, "point is not in the subgroup of order n"));
    }
    Ok(())
}

fn check_private_range(group: &CurveGroup, d: &BigUint) -> Result<()> {
    if d.is_zero() || d >= group.order() {
        return Err(Error::key("private key", "scalar must lie in [1, n-1]"));
    }
    Ok(())
}

/// An ECDSA key pair bound to one curve group
///
/// The private key is optional; a key pair built from a public point alone
/// can only verify.
#[derive(Clone)]
pub struct KeyPair {
    group: CurveGroup,
    public_key: AffinePoint,
    private_key: Option<SecretScalar>,
}

impl KeyPair {
    /// An empty key pair: no private key, public key at infinity
    pub fn new(group: CurveGroup) -> Self {
        KeyPair {
            group,
            public_key: AffinePoint::infinity(),
            private_key: None,
        }
    }

    /// An empty key pair on a named curve
    pub fn named(name: &str) -> Result<Self> {
        Ok(Self::new(CurveGroup::named(name)?))
    }

    /// Generate a fresh key pair
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(group: CurveGroup, rng: &mut R) -> Result<Self> {
        let d = generate_private_key(&group, rng)?;
        let public_key = derive_public_key(&group, &d.to_biguint())?;
        Ok(KeyPair {
            group,
            public_key,
            private_key: Some(d),
        })
    }

    /// Key pair from a private scalar; the public key is derived
    pub fn from_private(group: CurveGroup, d: &BigUint) -> Result<Self> {
        let mut key = Self::new(group);
        key.set_private_key(d)?;
        Ok(key)
    }

    /// Verification-only key pair from a validated public point
    pub fn from_public(group: CurveGroup, q: AffinePoint) -> Result<Self> {
        let mut key = Self::new(group);
        key.set_public_key(q)?;
        Ok(key)
    }

    /// Key pair from both halves, checked for consistency
    pub fn from_parts(group: CurveGroup, q: AffinePoint, d: &BigUint) -> Result<Self> {
        check_private_range(&group, d)?;
        let width = group.scalar_field().byte_len();
        let key = KeyPair {
            group,
            public_key: q,
            private_key: Some(SecretScalar::from_biguint(d, width)),
        };
        key.check_key()?;
        Ok(key)
    }

    /// The curve group
    pub fn group(&self) -> &CurveGroup {
        &self.group
    }

    /// The public point `Q`
    pub fn public_key(&self) -> &AffinePoint {
        &self.public_key
    }

    /// The private scalar, if present
    pub fn private_key(&self) -> Option<&SecretScalar> {
        self.private_key.as_ref()
    }

    /// Whether the key pair can sign
    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Replace the private key and re-derive `Q`
    pub fn set_private_key(&mut self, d: &BigUint) -> Result<()> {
        let public_key = derive_public_key(&self.group, d)?;
        let width = self.group.scalar_field().byte_len();
        self.private_key = Some(SecretScalar::from_biguint(d, width));
        self.public_key = public_key;
        Ok(())
    }

    /// Replace the public key after validating it
    ///
    /// Any private key is wiped and dropped since it no longer matches.
    pub fn set_public_key(&mut self, q: AffinePoint) -> Result<()> {
        validate_public_key(&self.group, &q)?;
        self.clear_private_key();
        self.public_key = q;
        Ok(())
    }

    /// Validate `Q`, and when a private key is present check `d ∈ [1, n-1]`
    /// and `d·G = Q`
    pub fn check_key(&self) -> Result<()> {
        validate_public_key(&self.group, &self.public_key)?;
        if let Some(secret) = &self.private_key {
            let derived = derive_public_key(&self.group, &secret.to_biguint())?;
            if derived != self.public_key {
                return Err(Error::key("key check", "public key does not match private key"));
            }
        }
        Ok(())
    }

    /// Exportable form of the private key
    pub fn to_private_record(&self) -> Result<PrivateKeyRecord> {
        let secret = self
            .private_key
            .as_ref()
            .ok_or_else(|| Error::key("private key export", "key pair has no private key"))?;
        Ok(PrivateKeyRecord {
            curve: self.group.name().to_string(),
            private_key: secret.to_hex().to_string(),
        })
    }

    /// Exportable form of the public key
    pub fn to_public_record(&self) -> Result<PublicKeyRecord> {
        if self.public_key.is_infinity() {
            return Err(Error::key("public key export", "key pair has no public key"));
        }
        let field = self.group.field();
        Ok(PublicKeyRecord {
            curve: self.group.name().to_string(),
            qx: hex::encode(field.to_bytes_be(self.public_key.x())),
            qy: hex::encode(field.to_bytes_be(self.public_key.y())),
        })
    }

    /// Rebuild a key pair from a private-key record
    pub fn from_private_record(record: &PrivateKeyRecord) -> Result<Self> {
        let group = CurveGroup::named(&record.curve)?;
        let d = validate::hex_integer(&record.private_key, "private_key")?;
        Self::from_private(group, &d)
    }

    /// Rebuild a verification-only key pair from a public-key record
    pub fn from_public_record(record: &PublicKeyRecord) -> Result<Self> {
        let group = CurveGroup::named(&record.curve)?;
        let q = AffinePoint::from_hex(&record.qx, &record.qy)?;
        Self::from_public(group, q)
    }

    fn clear_private_key(&mut self) {
        if let Some(mut secret) = self.private_key.take() {
            secret.zeroize();
        }
    }
}

impl Zeroize for KeyPair {
    fn zeroize(&mut self) {
        self.clear_private_key();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.group.name())
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key)
            .finish()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "curve {}", self.group.name())?;
        write!(f, "Q = {}", self.public_key)
    }
}

/// Private key as `(curve name, hex scalar)`
///
/// The hex string is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrivateKeyRecord {
    /// Named curve identifier
    pub curve: String,
    /// Private scalar, base 16
    pub private_key: String,
}

impl fmt::Debug for PrivateKeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyRecord")
            .field("curve", &self.curve)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Public key as `(curve name, hex x, hex y)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKeyRecord {
    /// Named curve identifier
    pub curve: String,
    /// x coordinate, base 16
    pub qx: String,
    /// y coordinate, base 16
    pub qy: String,
}
