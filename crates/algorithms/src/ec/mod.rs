//! Elliptic curves over prime fields
//!
//! A [`CurveGroup`] carries the domain parameters of a short-Weierstrass
//! curve `y² = x³ + ax + b` over GF(p) and implements the group law on
//! [`AffinePoint`]s. Scalar multiplication comes in several strategies
//! (see [`ScalarMulStrategy`]) that agree on every input and differ only in
//! their side-channel profile; the Jacobian [`ProjectivePoint`] engine backs
//! the windowed and projective ladders.

mod group;
mod mul;
mod point;
mod projective;

pub use group::{named_curves, CurveGroup};
pub use mul::ScalarMulStrategy;
pub use point::{
    AffinePoint, COMPRESSED_EVEN_TAG, COMPRESSED_ODD_TAG, INFINITY_TAG, UNCOMPRESSED_TAG,
};
pub use projective::ProjectivePoint;
