//! Trait definitions for the ecprime ecosystem

pub mod signature;

pub use signature::{SignatureScheme, Verification};
