//! # Domain Layer
//!
//! Pure signature logic written against the [`CurveGroup`] port.
//! No I/O and no global state.
//!
//! [`CurveGroup`]: crate::ports::outbound::CurveGroup

pub mod blind;
pub mod config;
pub mod entities;
pub mod errors;
pub mod jacobi;
pub mod nonce;
pub mod point_codec;
pub mod scalar;
pub mod schnorr;
