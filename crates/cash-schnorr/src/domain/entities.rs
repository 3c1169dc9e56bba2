//! # Domain Entities
//!
//! Byte-level shapes that cross the crate boundary.

use super::errors::SchnorrError;
use super::scalar::SCALAR_LEN;
use std::fmt;

/// Length of a BCH-style Schnorr signature: `R.x (32) ‖ s (32)`.
pub const SIGNATURE_LEN: usize = 64;

/// Compressed point length.
pub const COMPRESSED_POINT_LEN: usize = 33;

/// Uncompressed point length.
pub const UNCOMPRESSED_POINT_LEN: usize = 65;

/// Schnorr signature (64 bytes, `R.x ‖ s`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchnorrSignature([u8; SIGNATURE_LEN]);

impl SchnorrSignature {
    /// Create from bytes (64 bytes).
    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, rejecting anything but 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchnorrError> {
        let array: [u8; SIGNATURE_LEN] =
            bytes.try_into().map_err(|_| SchnorrError::InvalidLength {
                field: "signature",
                expected: "64",
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    pub(crate) fn from_parts(rx: &[u8; SCALAR_LEN], s: &[u8; SCALAR_LEN]) -> Self {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..SCALAR_LEN].copy_from_slice(rx);
        bytes[SCALAR_LEN..].copy_from_slice(s);
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// Consume into raw bytes.
    pub fn to_bytes(self) -> [u8; SIGNATURE_LEN] {
        self.0
    }

    /// The x-coordinate of the nonce point.
    pub fn r_bytes(&self) -> &[u8] {
        &self.0[..SCALAR_LEN]
    }

    /// The response scalar.
    pub fn s_bytes(&self) -> &[u8] {
        &self.0[SCALAR_LEN..]
    }
}

impl AsRef<[u8]> for SchnorrSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchnorrSignature({})", hex::encode(self.0))
    }
}
