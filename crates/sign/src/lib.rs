//! Digital signatures over prime-field elliptic curves
//!
//! This crate implements ECDSA on top of the curve arithmetic in
//! `ecprime-algorithms`: key generation and validation, the sign-setup /
//! sign / verify protocol, DER encoding and exportable key and signature
//! records.

#![forbid(unsafe_code)]

pub mod ecdsa;
pub mod error;

pub use ecdsa::{
    sign_digest, sign_message, sign_setup, verify_digest, verify_message, Ecdsa, EcdsaSignature,
    KeyPair, SignSetup,
};
pub use error::{Error, Result};
