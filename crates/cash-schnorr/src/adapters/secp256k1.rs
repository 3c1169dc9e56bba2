//! # secp256k1 Backend (k256)
//!
//! Implements [`CurveGroup`] on top of `k256::ProjectivePoint`. Scalars and
//! coordinates cross the port as `BigUint` and are converted at the edge.
//!
//! The backend is created once per process. Creation runs a self-test
//! (generator round trip and `(n-1)·G = -G`); a failure is cached and every
//! later call reports it as `CapabilityUnavailable`.

use crate::domain::errors::SchnorrError;
use crate::domain::scalar::int_to_bytes32;
use crate::ports::outbound::CurveGroup;
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar, U256};
use num_bigint::BigUint;
use std::sync::LazyLock;

const ORDER_HEX: &[u8] = b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
const FIELD_PRIME_HEX: &[u8] = b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

static BACKEND: LazyLock<Result<Secp256k1, SchnorrError>> = LazyLock::new(|| {
    let backend = Secp256k1::load();
    match &backend {
        Ok(_) => tracing::debug!("secp256k1 backend ready"),
        Err(e) => tracing::error!(error = %e, "secp256k1 backend unavailable"),
    }
    backend
});

/// The secp256k1 group `y² = x³ + 7`.
#[derive(Debug)]
pub struct Secp256k1 {
    n: BigUint,
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

/// Process-wide secp256k1 backend.
///
/// # Errors
/// * `CapabilityUnavailable` - the backend failed its self-test
pub fn secp256k1() -> Result<&'static Secp256k1, SchnorrError> {
    BACKEND.as_ref().map_err(Clone::clone)
}

impl Secp256k1 {
    fn load() -> Result<Self, SchnorrError> {
        let parse = |hex: &[u8]| {
            BigUint::parse_bytes(hex, 16)
                .ok_or(SchnorrError::CapabilityUnavailable("secp256k1 constants"))
        };
        let backend = Self {
            n: parse(ORDER_HEX)?,
            p: parse(FIELD_PRIME_HEX)?,
            a: BigUint::from(0u8),
            b: BigUint::from(7u8),
        };
        backend.self_test()?;
        Ok(backend)
    }

    fn self_test(&self) -> Result<(), SchnorrError> {
        let failed = SchnorrError::CapabilityUnavailable("secp256k1 self-test failed");
        let g = ProjectivePoint::GENERATOR;

        let (gx, gy) = self.coordinates(&g).ok_or_else(|| failed.clone())?;
        if self.from_coordinates(&gx, &gy) != Some(g) {
            return Err(failed);
        }
        let n_minus_one = &self.n - 1u8;
        if self.mul_generator(&n_minus_one) != -g {
            return Err(failed);
        }
        Ok(())
    }

    fn to_scalar(&self, value: &BigUint) -> Scalar {
        let bytes = FieldBytes::from(int_to_bytes32(&(value % &self.n)));
        <Scalar as Reduce<U256>>::reduce_bytes(&bytes)
    }
}

impl CurveGroup for Secp256k1 {
    type Point = ProjectivePoint;

    fn name(&self) -> &'static str {
        "secp256k1"
    }

    fn order(&self) -> &BigUint {
        &self.n
    }

    fn field_prime(&self) -> &BigUint {
        &self.p
    }

    fn coefficients(&self) -> (&BigUint, &BigUint) {
        (&self.a, &self.b)
    }

    fn generator(&self) -> ProjectivePoint {
        ProjectivePoint::GENERATOR
    }

    fn identity(&self) -> ProjectivePoint {
        ProjectivePoint::IDENTITY
    }

    fn is_identity(&self, point: &ProjectivePoint) -> bool {
        *point == ProjectivePoint::IDENTITY
    }

    fn add(&self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        *lhs + *rhs
    }

    fn negate(&self, point: &ProjectivePoint) -> ProjectivePoint {
        -*point
    }

    fn scalar_mul(&self, scalar: &BigUint, point: &ProjectivePoint) -> ProjectivePoint {
        *point * self.to_scalar(scalar)
    }

    fn mul_generator(&self, scalar: &BigUint) -> ProjectivePoint {
        ProjectivePoint::GENERATOR * self.to_scalar(scalar)
    }

    fn coordinates(&self, point: &ProjectivePoint) -> Option<(BigUint, BigUint)> {
        if self.is_identity(point) {
            return None;
        }
        let encoded = point.to_affine().to_encoded_point(false);
        let x = BigUint::from_bytes_be(encoded.x()?);
        let y = BigUint::from_bytes_be(encoded.y()?);
        Some((x, y))
    }

    fn from_coordinates(&self, x: &BigUint, y: &BigUint) -> Option<ProjectivePoint> {
        if x >= &self.p || y >= &self.p {
            return None;
        }
        let encoded = EncodedPoint::from_affine_coordinates(
            &FieldBytes::from(int_to_bytes32(x)),
            &FieldBytes::from(int_to_bytes32(y)),
            false,
        );
        let point: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        point.map(ProjectivePoint::from)
    }
}
