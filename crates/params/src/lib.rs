//! Constant values for ecprime operations
//!
//! Domain parameters are kept as base-16 strings so this crate stays free of
//! any bignum dependency; the algorithms crate parses them on lookup.

#![no_std]

pub mod traditional;
pub mod utils;
