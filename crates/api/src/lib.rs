//! Public API traits and types for the ecprime library
//!
//! This crate provides the public API surface shared by the other ecprime
//! crates: the error type every layer converts into and the signature
//! scheme trait.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{SignatureScheme, Verification};

// Re-export trait modules for direct access
pub use traits::signature;
