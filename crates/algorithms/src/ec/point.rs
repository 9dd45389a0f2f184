//! Affine points

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{validate, Result};

/// Tag byte of the SEC1 uncompressed encoding
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Tag byte of a compressed point with even y
pub const COMPRESSED_EVEN_TAG: u8 = 0x02;

/// Tag byte of a compressed point with odd y
pub const COMPRESSED_ODD_TAG: u8 = 0x03;

/// Encoding of the point at infinity
pub const INFINITY_TAG: u8 = 0x00;

/// A point `(x, y)` on a short-Weierstrass curve, or the point at infinity
///
/// Coordinates of the point at infinity are zero and carry no meaning.
/// A point does not know its curve; every check against the curve equation
/// goes through [`crate::ec::CurveGroup`].
#[derive(Clone, Debug, Eq)]
pub struct AffinePoint {
    x: BigUint,
    y: BigUint,
    infinity: bool,
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        if self.infinity || other.infinity {
            return self.infinity == other.infinity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl AffinePoint {
    /// A finite point from its coordinates
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// A finite point from big-endian base-16 coordinates
    pub fn from_hex(x: &str, y: &str) -> Result<Self> {
        Ok(Self::new(
            validate::hex_integer(x, "point x-coordinate")?,
            validate::hex_integer(y, "point y-coordinate")?,
        ))
    }

    /// The neutral element
    pub fn infinity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: true,
        }
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// The x-coordinate
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Whether y is odd, which selects the compressed tag
    pub fn y_is_odd(&self) -> bool {
        self.y.bit(0)
    }

    /// SEC1 uncompressed encoding `04 ‖ x ‖ y` with `field_bytes`-wide coordinates
    ///
    /// The point at infinity encodes as the single byte `00`.
    pub fn to_uncompressed(&self, field_bytes: usize) -> Vec<u8> {
        if self.infinity {
            return vec![INFINITY_TAG];
        }
        let mut out = Vec::with_capacity(1 + 2 * field_bytes);
        out.push(UNCOMPRESSED_TAG);
        out.extend_from_slice(&fixed_width(&self.x, field_bytes));
        out.extend_from_slice(&fixed_width(&self.y, field_bytes));
        out
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "(infinity)")
        } else {
            write!(f, "({:x}, {:x})", self.x, self.y)
        }
    }
}

/// Left-pad the big-endian bytes of `v` to `width`
pub(crate) fn fixed_width(v: &BigUint, width: usize) -> Vec<u8> {
    let raw = v.to_bytes_be();
    if raw.len() >= width {
        return raw;
    }
    let mut out = vec![0u8; width - raw.len()];
    out.extend_from_slice(&raw);
    out
}
