//! Prime-field and elliptic-curve arithmetic
//!
//! This crate provides the arithmetic layers under the ECDSA implementation
//! in `ecprime-sign`:
//!
//! - [`field`]: GF(p) arithmetic over arbitrary-precision integers with a
//!   variable-time and a constant-flow view, inversion, exponentiation
//!   ladders and square roots.
//! - [`ec`]: short-Weierstrass curve groups, affine and Jacobian points and
//!   the scalar multiplication strategies.
//! - [`hash`]: the digests ECDSA hashes messages with.
//!
//! # Security Features
//!
//! - Constant-time limb addition, subtraction, selection and swaps for
//!   secret operands
//! - Exponentiation and scalar multiplication ladders whose operation
//!   sequence does not depend on the bits of the secret
//! - Scanned table lookups in the windowed methods

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{validate, Error, Result, ResultExt};

pub mod field;
pub use field::{ConstantTime, Fast, FieldOps, PrimeField};

pub mod ec;
pub use ec::{named_curves, AffinePoint, CurveGroup, ProjectivePoint, ScalarMulStrategy};

pub mod hash;
pub use hash::{digest_to_integer, DigestAlgorithm};
