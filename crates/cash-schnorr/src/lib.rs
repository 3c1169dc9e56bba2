//! # Cash Schnorr
//!
//! Schnorr signatures over secp256k1 in the Bitcoin Cash convention, plus a
//! two-party blind-signature protocol.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Jacobi symbol, RFC6979 nonces, point
//!   codec, signing and blinding, written against the curve port only
//! - **Ports Layer** (`ports/`): `CurveGroup` (outbound) and `SchnorrApi`
//!   (inbound)
//! - **Adapters Layer** (`adapters/`): the k256-backed secp256k1 group
//! - **Service Layer** (`service.rs`): configuration and logging around the
//!   domain
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), cash_schnorr::SchnorrError> {
//! let privkey = [0x01u8; 32];
//! let digest = [0x00u8; 32];
//! let pubkey = cash_schnorr::public_key(&privkey, true)?;
//! let sig = cash_schnorr::sign(&privkey, &digest)?;
//! assert!(cash_schnorr::verify(&pubkey, sig.as_bytes(), &digest)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Notes
//!
//! - Not constant time. Do not sign automatically on behalf of untrusted
//!   parties that can measure timing.
//! - A [`BlindSigner`] is good for exactly one response.

#![warn(missing_docs)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;


// Re-export public API
pub use adapters::{is_available, secp256k1, Secp256k1};
pub use domain::blind::{BlindRequester, BlindSigner};
pub use domain::config::{SchnorrConfig, MAX_PROBE_WINDOW};
pub use domain::entities::{
    SchnorrSignature, COMPRESSED_POINT_LEN, SIGNATURE_LEN, UNCOMPRESSED_POINT_LEN,
};
pub use domain::errors::{PointDecodeError, SchnorrError};
pub use domain::jacobi::jacobi;
pub use domain::nonce::{nonce_rfc6979, ALGO16_SCHNORR_SHA256};
pub use domain::point_codec::{decode_point, decode_point_with_window, encode_point};
pub use domain::schnorr::SchnorrSigner;
pub use ports::inbound::SchnorrApi;
pub use ports::outbound::CurveGroup;
pub use service::SchnorrService;

/// Sign a 32-byte digest with a 32-byte secp256k1 private key.
pub fn sign(privkey: &[u8], msg: &[u8]) -> Result<SchnorrSignature, SchnorrError> {
    SchnorrSigner::new()?.sign(privkey, msg)
}

/// Verify a 64-byte signature against a 33- or 65-byte secp256k1 public key.
pub fn verify(pubkey: &[u8], signature: &[u8], msg: &[u8]) -> Result<bool, SchnorrError> {
    SchnorrSigner::new()?.verify(pubkey, signature, msg)
}

/// Serialized secp256k1 public key for a 32-byte private key.
pub fn public_key(privkey: &[u8], compressed: bool) -> Result<Vec<u8>, SchnorrError> {
    SchnorrSigner::new()?.public_key(privkey, compressed)
}
