//! # ecprime
//!
//! Elliptic-curve cryptography over prime fields and ECDSA, built on
//! arbitrary-precision integers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecprime = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support in the dependencies
//! - `algorithms` (default): field and curve arithmetic
//! - `sign` (default): ECDSA
//! - `serde`: `Serialize`/`Deserialize` on key and signature records
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecprime-api`]: public error type and the signature trait
//! - [`ecprime-internal`]: constant-time helpers
//! - [`ecprime-params`]: named-curve parameters
//! - [`ecprime-algorithms`]: prime fields, curve groups, scalar multiplication
//! - [`ecprime-sign`]: ECDSA keys, signatures and protocol
//!
//! ## Example
//!
//! ```
//! use ecprime::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let scheme = Ecdsa::named("secp256r1")?;
//! let keypair = scheme.keypair(&mut OsRng)?;
//! let signature = scheme.sign(b"hello", &keypair, &mut OsRng)?;
//! let public_key = scheme.public_key(&keypair)?;
//! assert!(scheme.verify(b"hello", &signature, &public_key)?.is_valid());
//! # Ok::<(), ecprime::api::Error>(())
//! ```

// Core re-exports (always available)
pub use ecprime_api as api;
pub use ecprime_internal as internal;
pub use ecprime_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecprime_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use ecprime_sign as sign;

/// Common imports for ecprime users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{SignatureScheme, Verification};

    // Arbitrary-precision integers used throughout the public API
    pub use num_bigint::BigUint;

    pub use zeroize::Zeroize;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        AffinePoint, CurveGroup, DigestAlgorithm, FieldOps, PrimeField, ScalarMulStrategy,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::ecdsa::{Ecdsa, EcdsaSignature, KeyPair, SignSetup};
}
