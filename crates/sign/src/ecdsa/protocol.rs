//! ECDSA signature generation and verification
//!
//! This implementation follows FIPS 186-4: Digital Signature Standard (DSS),
//! Section 6. Nonces are drawn from the caller's CSPRNG; `k⁻¹` and `s⁻¹`
//! are computed by Fermat inversion, never by the variable-time Euclid.

use core::fmt;

use ecprime_algorithms::field::invert_fermat;
use ecprime_algorithms::{digest_to_integer, AffinePoint, CurveGroup, DigestAlgorithm, FieldOps, ScalarMulStrategy};
use ecprime_api::{Result as ApiResult, SignatureScheme, Verification};
use ecprime_internal::constant_time::ct_eq;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use super::key::{KeyPair, SecretScalar};
use super::signature::EcdsaSignature;
use crate::error::{Error, Result};

/// Per-signature precomputation `(k⁻¹ mod n, r)`
///
/// A setup may be computed ahead of time and handed to [`sign_digest`]. It
/// must be used for one signature only.
#[derive(Clone)]
pub struct SignSetup {
    kinv: SecretScalar,
    r: BigUint,
}

impl SignSetup {
    /// Setup for a caller-chosen nonce `k ∈ [1, n-1]`
    ///
    /// Meant for known-answer tests. Fails with [`Error::Nonce`] when `k`
    /// is out of range or yields `r = 0`.
    pub fn from_nonce(key: &KeyPair, k: &BigUint) -> Result<Self> {
        const CONTEXT: &str = "ECDSA sign setup";
        let group = key.group();
        if k.is_zero() || k >= group.order() {
            return Err(Error::Nonce { context: CONTEXT });
        }
        let point = group.mul_projective(&padded_nonce(group, k), group.generator())?;
        finish_setup(group, k, &point)?.ok_or(Error::Nonce { context: CONTEXT })
    }

    /// `k⁻¹ mod n`
    pub fn kinv(&self) -> &SecretScalar {
        &self.kinv
    }

    /// `r = (k·G).x mod n`
    pub fn r(&self) -> &BigUint {
        &self.r
    }
}

impl fmt::Debug for SignSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignSetup")
            .field("kinv", &self.kinv)
            .field("r", &self.r)
            .finish()
    }
}

/// `k + n`, or `k + 2n` if that is still no longer than `n`
///
/// Both multiply `G` to the same point; the ladder then always sees a
/// scalar of `bitlen(n) + 1` bits.
fn padded_nonce(group: &CurveGroup, k: &BigUint) -> BigUint {
    let n = group.order();
    let mut padded = k + n;
    if padded.bits() <= n.bits() {
        padded += n;
    }
    padded
}

/// `r = R.x mod n` and `k⁻¹`, or `None` when `r = 0`
fn finish_setup(group: &CurveGroup, k: &BigUint, point: &AffinePoint) -> Result<Option<SignSetup>> {
    if point.is_infinity() {
        return Ok(None);
    }
    let r = point.x() % group.order();
    if r.is_zero() {
        return Ok(None);
    }
    let scalars = group.scalar_field();
    let kinv = invert_fermat(k, scalars)?;
    Ok(Some(SignSetup {
        kinv: SecretScalar::from_biguint(&kinv, scalars.byte_len()),
        r,
    }))
}

/// Draw a nonce and precompute `(k⁻¹, r)` with the default ladder
pub fn sign_setup<R: RngCore + CryptoRng + ?Sized>(key: &KeyPair, rng: &mut R) -> Result<SignSetup> {
    sign_setup_with(key, ScalarMulStrategy::default(), rng)
}

/// Draw a nonce and precompute `(k⁻¹, r)` with the given ladder
///
/// 1. k = a random integer in [1, n-1]
/// 2. R = k'·G with k' = k + n (or k + 2n) of fixed bit length
/// 3. r = R.x mod n; if r = 0, go back to step 1
/// 4. kinv = k⁻¹ mod n
pub fn sign_setup_with<R: RngCore + CryptoRng + ?Sized>(
    key: &KeyPair,
    strategy: ScalarMulStrategy,
    rng: &mut R,
) -> Result<SignSetup> {
    let group = key.group();
    let n = group.order();
    if n.bits() < 2 {
        return Err(Error::curve("ECDSA sign setup", "group order below 2"));
    }
    loop {
        let k = rng.gen_biguint_below(n);
        if k.is_zero() {
            continue;
        }
        let point = group.mul_generator(strategy, &padded_nonce(group, &k), rng)?;
        if let Some(setup) = finish_setup(group, &k, &point)? {
            return Ok(setup);
        }
    }
}

/// Digest bytes to `e`, rejecting empty, zero and over-wide digests
fn digest_integer(group: &CurveGroup, digest: &[u8], truncate: bool, context: &'static str) -> Result<BigUint> {
    if digest.is_empty() {
        return Err(Error::digest(context, "empty digest"));
    }
    let e = if truncate {
        digest_to_integer(digest, group.order_bits())
    } else {
        BigUint::from_bytes_be(digest)
    };
    if e.bits() > group.order_bits() {
        return Err(Error::digest(context, "digest is wider than the group order"));
    }
    if e.is_zero() {
        return Err(Error::digest(context, "zero digest"));
    }
    Ok(e)
}

/// Sign the integer `e`
///
/// 1. If no setup was supplied, run [`sign_setup_with`]
/// 2. s = k⁻¹(e + rd) mod n
/// 3. If s = 0, go back to step 1, or fail when the setup was supplied
/// 4. Return signature (r, s)
fn sign_integer<R: RngCore + CryptoRng + ?Sized>(
    e: &BigUint,
    key: &KeyPair,
    supplied: Option<&SignSetup>,
    strategy: ScalarMulStrategy,
    rng: &mut R,
) -> Result<EcdsaSignature> {
    const CONTEXT: &str = "ECDSA sign";
    let group = key.group();
    let secret = key
        .private_key()
        .ok_or_else(|| Error::key(CONTEXT, "key pair has no private key"))?;
    let scalars = group.scalar_field();
    let ops = scalars.ct();
    let d = secret.to_biguint();
    let e = scalars.reduce(e);

    if let Some(setup) = supplied {
        if setup.r.is_zero() || &setup.r >= group.order() {
            return Err(Error::Nonce { context: CONTEXT });
        }
    }

    loop {
        let fresh;
        let setup = match supplied {
            Some(setup) => setup,
            None => {
                fresh = sign_setup_with(key, strategy, rng)?;
                &fresh
            }
        };

        let kinv = setup.kinv.to_biguint();
        let s = ops.mul(&kinv, &ops.add(&e, &ops.mul(&d, &setup.r)));
        if s.is_zero() {
            if supplied.is_some() {
                return Err(Error::Nonce { context: CONTEXT });
            }
            continue;
        }
        return Ok(EcdsaSignature::new(setup.r.clone(), s));
    }
}

/// Verify a signature on the integer `e`
///
/// 1. Verify that r and s are integers in [1, n-1]
/// 2. w = s⁻¹ mod n
/// 3. u₁ = ew mod n and u₂ = rw mod n
/// 4. X = u₁·G + u₂·Q; if X = O, reject the signature
/// 5. Accept the signature if and only if X.x mod n = r
fn verify_integer(e: &BigUint, signature: &EcdsaSignature, key: &KeyPair) -> Result<Verification> {
    const CONTEXT: &str = "ECDSA verify";
    let group = key.group();
    let n = group.order();
    let (r, s) = (signature.r(), signature.s());
    if r.is_zero() || r >= n || s.is_zero() || s >= n {
        return Err(Error::signature(CONTEXT, "r and s must lie in [1, n-1]"));
    }
    let q = key.public_key();
    if q.is_infinity() {
        return Err(Error::key(CONTEXT, "key pair has no public key"));
    }

    let scalars = group.scalar_field();
    let ops = scalars.ct();
    let w = invert_fermat(s, scalars)?;
    let u1 = ops.mul(&scalars.reduce(e), &w);
    let u2 = ops.mul(r, &w);

    let x = group.mul_add_public(&u1, &u2, q)?;
    if x.is_infinity() {
        return Ok(Verification::Invalid);
    }
    let v = x.x() % n;
    Ok(ct_eq(scalars.to_bytes_be(&v), scalars.to_bytes_be(r)).into())
}

/// Sign a precomputed digest
///
/// The digest must not be wider than the group order once leading zero bits
/// are dropped. With `setup` supplied the nonce is fixed, and an unusable
/// nonce is reported as [`Error::Nonce`] instead of retried.
pub fn sign_digest<R: RngCore + CryptoRng + ?Sized>(
    digest: &[u8],
    key: &KeyPair,
    setup: Option<&SignSetup>,
    rng: &mut R,
) -> Result<EcdsaSignature> {
    let e = digest_integer(key.group(), digest, false, "ECDSA sign")?;
    sign_integer(&e, key, setup, ScalarMulStrategy::default(), rng)
}

/// Verify a signature on a precomputed digest
///
/// Components out of range are an error; a well-formed signature that does
/// not match is [`Verification::Invalid`].
pub fn verify_digest(digest: &[u8], signature: &EcdsaSignature, key: &KeyPair) -> Result<Verification> {
    let e = digest_integer(key.group(), digest, false, "ECDSA verify")?;
    verify_integer(&e, signature, key)
}

/// Hash `message` with the curve's digest and sign it
pub fn sign_message<R: RngCore + CryptoRng + ?Sized>(
    message: &[u8],
    key: &KeyPair,
    rng: &mut R,
) -> Result<EcdsaSignature> {
    let group = key.group();
    let digest = DigestAlgorithm::for_order_bits(group.order_bits()).digest(message);
    let e = digest_integer(group, &digest, true, "ECDSA sign")?;
    sign_integer(&e, key, None, ScalarMulStrategy::default(), rng)
}

/// Hash `message` with the curve's digest and verify the signature on it
pub fn verify_message(message: &[u8], signature: &EcdsaSignature, key: &KeyPair) -> Result<Verification> {
    let group = key.group();
    let digest = DigestAlgorithm::for_order_bits(group.order_bits()).digest(message);
    let e = digest_integer(group, &digest, true, "ECDSA verify")?;
    verify_integer(&e, signature, key)
}

/// ECDSA over a runtime curve group
///
/// Messages are hashed with [`DigestAlgorithm::for_order_bits`] unless
/// another digest is chosen; digests wider than the order are truncated to
/// their leftmost bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ecdsa {
    group: CurveGroup,
    digest: DigestAlgorithm,
    strategy: ScalarMulStrategy,
}

impl Ecdsa {
    /// ECDSA over `group` with its default digest
    pub fn new(group: CurveGroup) -> Self {
        let digest = DigestAlgorithm::for_order_bits(group.order_bits());
        Ecdsa {
            group,
            digest,
            strategy: ScalarMulStrategy::default(),
        }
    }

    /// ECDSA over a named curve
    pub fn named(name: &str) -> Result<Self> {
        Ok(Self::new(CurveGroup::named(name)?))
    }

    /// Use another message digest
    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    /// Use another ladder for `k·G`
    pub fn with_strategy(mut self, strategy: ScalarMulStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The curve group
    pub fn group(&self) -> &CurveGroup {
        &self.group
    }

    /// The message digest
    pub fn digest_algorithm(&self) -> DigestAlgorithm {
        self.digest
    }

    /// The ladder used for `k·G`
    pub fn strategy(&self) -> ScalarMulStrategy {
        self.strategy
    }

    fn message_integer(&self, message: &[u8], context: &'static str) -> Result<BigUint> {
        digest_integer(&self.group, &self.digest.digest(message), true, context)
    }

    fn check_group(&self, key: &KeyPair, context: &'static str) -> Result<()> {
        if key.group() != &self.group {
            return Err(Error::curve(
                context,
                format!("key is on {}, scheme is on {}", key.group().name(), self.group.name()),
            ));
        }
        Ok(())
    }
}

impl SignatureScheme for Ecdsa {
    type PublicKey = AffinePoint;
    type KeyPair = KeyPair;
    type SignatureData = EcdsaSignature;

    fn name(&self) -> String {
        format!("ECDSA-{}-{}", self.group.name(), self.digest)
    }

    /// Generate an ECDSA key pair
    ///
    /// Reference: FIPS 186-4, Appendix B.4.1
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::KeyPair> {
        Ok(KeyPair::generate(self.group.clone(), rng)?)
    }

    fn public_key(&self, keypair: &Self::KeyPair) -> ApiResult<Self::PublicKey> {
        self.check_group(keypair, "ECDSA public key")?;
        if keypair.public_key().is_infinity() {
            return Err(Error::key("ECDSA public key", "key pair has no public key").into());
        }
        Ok(keypair.public_key().clone())
    }

    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        keypair: &Self::KeyPair,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        const CONTEXT: &str = "ECDSA sign";
        self.check_group(keypair, CONTEXT)?;
        let e = self.message_integer(message, CONTEXT)?;
        Ok(sign_integer(&e, keypair, None, self.strategy, rng)?)
    }

    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<Verification> {
        let key = KeyPair::from_public(self.group.clone(), public_key.clone())?;
        let e = self.message_integer(message, "ECDSA verify")?;
        Ok(verify_integer(&e, signature, &key)?)
    }
}
