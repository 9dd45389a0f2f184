//! Digital signature traits for ecprime
//!
//! Schemes here are parameterized by a runtime curve, so the trait methods
//! take `&self` and the scheme value carries its domain parameters.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Outcome of checking a well-formed signature
///
/// Malformed inputs are reported as errors. A structurally valid signature
/// that does not match resolves to `Invalid`; nothing else is ever `Valid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verification {
    /// The signature matches the message and public key
    Valid,
    /// The signature was well formed but does not match
    Invalid,
}

impl Verification {
    /// Whether the check succeeded
    pub fn is_valid(self) -> bool {
        matches!(self, Verification::Valid)
    }
}

impl From<bool> for Verification {
    fn from(ok: bool) -> Self {
        if ok {
            Verification::Valid
        } else {
            Verification::Invalid
        }
    }
}

/// Core trait for signature schemes bound to a set of domain parameters
///
/// # Type Safety
///
/// Key pairs own their secret material and must wipe it when dropped; the
/// trait requires `Zeroize` so generic callers can also clear it early.
pub trait SignatureScheme {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Key pair type, owning the secret part
    type KeyPair: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this scheme instance
    fn name(&self) -> String;

    /// Generate a new key pair using the provided RNG
    ///
    /// # Security Requirements
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(&self, keypair: &Self::KeyPair) -> Result<Self::PublicKey>;

    /// Sign a message with the given key pair
    ///
    /// The RNG supplies the per-signature nonce and any masking randomness.
    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        keypair: &Self::KeyPair,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<Verification>;
}
