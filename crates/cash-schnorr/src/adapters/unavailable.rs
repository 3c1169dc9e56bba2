//! Placeholder backend used when the `secp256k1` feature is disabled.
//!
//! [`Secp256k1`] has no values, so no signer can ever be built over it and
//! [`secp256k1()`] is the only way in.

use crate::domain::errors::SchnorrError;
use crate::ports::outbound::CurveGroup;
use num_bigint::BigUint;
use std::convert::Infallible;

/// Uninhabited stand-in for the secp256k1 group.
#[derive(Debug)]
pub enum Secp256k1 {}

/// Always fails: the crate was built without a secp256k1 backend.
pub fn secp256k1() -> Result<&'static Secp256k1, SchnorrError> {
    tracing::debug!("secp256k1 requested but the backend is not compiled in");
    Err(SchnorrError::CapabilityUnavailable(
        "secp256k1 backend not compiled in (enable the `secp256k1` feature)",
    ))
}

impl CurveGroup for Secp256k1 {
    type Point = Infallible;

    fn name(&self) -> &'static str {
        match *self {}
    }

    fn order(&self) -> &BigUint {
        match *self {}
    }

    fn field_prime(&self) -> &BigUint {
        match *self {}
    }

    fn coefficients(&self) -> (&BigUint, &BigUint) {
        match *self {}
    }

    fn generator(&self) -> Infallible {
        match *self {}
    }

    fn identity(&self) -> Infallible {
        match *self {}
    }

    fn is_identity(&self, _point: &Infallible) -> bool {
        match *self {}
    }

    fn add(&self, _lhs: &Infallible, _rhs: &Infallible) -> Infallible {
        match *self {}
    }

    fn negate(&self, _point: &Infallible) -> Infallible {
        match *self {}
    }

    fn scalar_mul(&self, _scalar: &BigUint, _point: &Infallible) -> Infallible {
        match *self {}
    }

    fn coordinates(&self, _point: &Infallible) -> Option<(BigUint, BigUint)> {
        match *self {}
    }

    fn from_coordinates(&self, _x: &BigUint, _y: &BigUint) -> Option<Infallible> {
        match *self {}
    }
}
