//! # Inbound Ports (Driving Ports / API)
//!
//! The single-key signing API. Blind sessions carry per-session state and
//! are opened through [`SchnorrService`](crate::service::SchnorrService)
//! directly.

use crate::domain::entities::SchnorrSignature;
use crate::domain::errors::SchnorrError;

/// Primary Schnorr API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SchnorrApi: Send + Sync {
    /// Derive the serialized public key for a 32-byte private key.
    fn public_key(&self, privkey: &[u8], compressed: bool) -> Result<Vec<u8>, SchnorrError>;

    /// Deterministically sign a 32-byte message digest.
    fn sign(&self, privkey: &[u8], msg: &[u8]) -> Result<SchnorrSignature, SchnorrError>;

    /// Verify a 64-byte signature against a 33- or 65-byte public key.
    ///
    /// `Ok(false)` means the signature is well-formed but invalid.
    fn verify(&self, pubkey: &[u8], signature: &[u8], msg: &[u8]) -> Result<bool, SchnorrError>;
}
