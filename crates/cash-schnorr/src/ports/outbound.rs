//! # Outbound Ports (Driven Ports / SPI)
//!
//! The elliptic-curve group this crate signs over. Signing, verification
//! and blinding are written against this trait only, so the production
//! secp256k1 backend and the small test curve are interchangeable.

use num_bigint::BigUint;
use std::fmt::Debug;

/// A prime-order short Weierstrass group `y² = x³ + a·x + b` over `F_p`.
///
/// Requirements on implementors:
/// - `p` and `n` fit in 256 bits (points and scalars serialize to 32 bytes)
/// - `p ≡ 3 (mod 4)` (point decompression uses `y = (y²)^((p+1)/4)`)
/// - scalar arguments may be any non-negative integer and are reduced mod `n`
pub trait CurveGroup: Send + Sync {
    /// Group element. The identity must be representable.
    type Point: Clone + PartialEq + Debug + Send + Sync;

    /// Short human-readable curve name, used in log fields.
    fn name(&self) -> &'static str;

    /// Group order `n`.
    fn order(&self) -> &BigUint;

    /// Field prime `p`.
    fn field_prime(&self) -> &BigUint;

    /// Curve coefficients `(a, b)`.
    fn coefficients(&self) -> (&BigUint, &BigUint);

    /// The distinguished generator `G`.
    fn generator(&self) -> Self::Point;

    /// The point at infinity.
    fn identity(&self) -> Self::Point;

    /// Whether `point` is the point at infinity.
    fn is_identity(&self, point: &Self::Point) -> bool;

    /// Group addition.
    fn add(&self, lhs: &Self::Point, rhs: &Self::Point) -> Self::Point;

    /// Group negation.
    fn negate(&self, point: &Self::Point) -> Self::Point;

    /// Scalar multiplication `k·P`.
    fn scalar_mul(&self, scalar: &BigUint, point: &Self::Point) -> Self::Point;

    /// Fixed-base multiplication `k·G`.
    fn mul_generator(&self, scalar: &BigUint) -> Self::Point {
        self.scalar_mul(scalar, &self.generator())
    }

    /// Affine coordinates, or `None` for the point at infinity.
    fn coordinates(&self, point: &Self::Point) -> Option<(BigUint, BigUint)>;

    /// Build a point from affine coordinates.
    ///
    /// Returns `None` unless `x, y < p` and the pair satisfies the curve
    /// equation.
    fn from_coordinates(&self, x: &BigUint, y: &BigUint) -> Option<Self::Point>;
}
