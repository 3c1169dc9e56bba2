//! # Adapters Module
//!
//! Curve backends implementing the [`CurveGroup`] port.
//!
//! With the `secp256k1` feature the backend is k256. Without it
//! [`Secp256k1`] is an uninhabited type and [`secp256k1()`] reports
//! [`SchnorrError::CapabilityUnavailable`], so every high-level entry
//! point fails the same way instead of disappearing from the API.
//!
//! [`CurveGroup`]: crate::ports::outbound::CurveGroup
//! [`SchnorrError::CapabilityUnavailable`]: crate::domain::errors::SchnorrError::CapabilityUnavailable

#[cfg(feature = "secp256k1")]
mod secp256k1;
#[cfg(not(feature = "secp256k1"))]
mod unavailable;

#[cfg(feature = "secp256k1")]
pub use self::secp256k1::{secp256k1, Secp256k1};
#[cfg(not(feature = "secp256k1"))]
pub use self::unavailable::{secp256k1, Secp256k1};

/// Whether the secp256k1 backend is compiled in and passed its self-test.
pub fn is_available() -> bool {
    secp256k1().is_ok()
}
