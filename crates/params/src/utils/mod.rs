//! Shared constants that are not tied to one curve

pub mod hash;
