//! Constants for traditional (elliptic-curve) algorithms

pub mod ecdsa;

pub use ecdsa::{curve_by_name, CurveParams, NAMED_CURVES};
