//! Validation utilities for the arithmetic layers

use num_bigint::BigUint;

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `value < bound`
#[inline]
pub fn below(value: &BigUint, bound: &BigUint, name: &'static str) -> Result<()> {
    if value >= bound {
        return Err(Error::param(name, "value is not reduced below its bound"));
    }
    Ok(())
}

/// Parse a big-endian base-16 string, tolerating an optional `0x` prefix
pub fn hex_integer(s: &str, name: &'static str) -> Result<BigUint> {
    let digits = s.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    if digits.is_empty() {
        return Err(Error::param(name, "empty hexadecimal string"));
    }
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::param(name, format!("'{}' is not hexadecimal", s)))
}
