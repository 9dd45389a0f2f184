//! ECDSA over prime-field short-Weierstrass curves
//!
//! Keys, signatures and the signing protocol are parameterized by a
//! [`CurveGroup`](ecprime_algorithms::CurveGroup) chosen at runtime, so one
//! implementation serves every named curve and any validated explicit one.

mod common;
pub mod key;
pub mod protocol;
pub mod signature;

pub use key::{
    derive_public_key, generate_private_key, validate_public_key, KeyPair, PrivateKeyRecord,
    PublicKeyRecord, SecretScalar,
};
pub use protocol::{
    sign_digest, sign_message, sign_setup, sign_setup_with, verify_digest, verify_message, Ecdsa,
    SignSetup,
};
pub use signature::{EcdsaSignature, SignatureRecord};
