//! # Schnorr Signatures (BCH convention)
//!
//! Deterministic single-key signing and verification:
//!
//! ```text
//! k  = RFC6979(x, m, "Schnorr+SHA256  ")
//! R  = k·G, negate k when jacobi(R.y) = -1
//! e  = SHA256(R.x ‖ compressed(P) ‖ m)
//! s  = k + e·x mod n
//! σ  = R.x ‖ s
//! ```
//!
//! ## Security Notes
//!
//! - Arithmetic goes through a generic big-integer path and is NOT
//!   constant time. Do not use in automated-signing services exposed to
//!   timing observers.
//! - `verify` returns `Ok(false)` for any cryptographic mismatch and an
//!   error only for malformed input. Callers must not conflate the two.

use super::config::SchnorrConfig;
use super::entities::{SchnorrSignature, COMPRESSED_POINT_LEN, UNCOMPRESSED_POINT_LEN};
use super::errors::{PointDecodeError, SchnorrError};
use super::jacobi::jacobi_unsigned;
use super::nonce::{nonce_rfc6979, ALGO16_SCHNORR_SHA256};
use super::point_codec::{decode_point_with_window, encode_compressed, encode_point};
use super::scalar::{expect_len, in_open_range, int_from_bytes, int_to_bytes32, SCALAR_LEN};
use crate::adapters::{secp256k1, Secp256k1};
use crate::ports::outbound::CurveGroup;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use std::fmt;

/// Stateless signer/verifier bound to a curve backend.
pub struct SchnorrSigner<'a, C: CurveGroup = Secp256k1> {
    group: &'a C,
    config: SchnorrConfig,
}

impl<C: CurveGroup> Clone for SchnorrSigner<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CurveGroup> Copy for SchnorrSigner<'_, C> {}

impl<C: CurveGroup> fmt::Debug for SchnorrSigner<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchnorrSigner")
            .field("curve", &self.group.name())
            .field("config", &self.config)
            .finish()
    }
}

impl SchnorrSigner<'static, Secp256k1> {
    /// Signer over the process-wide secp256k1 backend.
    pub fn new() -> Result<Self, SchnorrError> {
        Ok(Self::with_group(secp256k1()?))
    }
}

impl<'a, C: CurveGroup> SchnorrSigner<'a, C> {
    /// Signer over `group` with the default configuration.
    pub fn with_group(group: &'a C) -> Self {
        Self {
            group,
            config: SchnorrConfig::default(),
        }
    }

    /// Signer over `group` with a validated configuration.
    pub fn with_config(group: &'a C, config: SchnorrConfig) -> Result<Self, SchnorrError> {
        config.validate()?;
        Ok(Self { group, config })
    }

    /// The curve backend.
    pub fn group(&self) -> &'a C {
        self.group
    }

    /// The active configuration.
    pub fn config(&self) -> &SchnorrConfig {
        &self.config
    }

    /// Serialized public key `x·G` for a 32-byte private key.
    pub fn public_key(&self, privkey: &[u8], compressed: bool) -> Result<Vec<u8>, SchnorrError> {
        let secret = self.parse_secret(privkey)?;
        encode_point(self.group, &self.group.mul_generator(&secret), compressed)
    }

    /// Sign a 32-byte message digest.
    ///
    /// # Errors
    /// * `InvalidLength` - key or digest is not 32 bytes
    /// * `OutOfRange` - key is not in `(0, n)`
    /// * `UnsupportedOrder` - the curve order is not 256 bits wide
    pub fn sign(&self, privkey: &[u8], msg: &[u8]) -> Result<SchnorrSignature, SchnorrError> {
        expect_len("private key", privkey, SCALAR_LEN)?;
        expect_len("message digest", msg, SCALAR_LEN)?;
        let secret = self.parse_secret(privkey)?;
        let nonce = nonce_rfc6979(self.group.order(), privkey, msg, ALGO16_SCHNORR_SHA256, &[])?;
        self.sign_with_nonce(&secret, nonce, msg)
    }

    /// Signing core with an externally supplied nonce `k ∈ (0, n)`.
    pub(crate) fn sign_with_nonce(
        &self,
        secret: &BigUint,
        mut nonce: BigUint,
        msg: &[u8],
    ) -> Result<SchnorrSignature, SchnorrError> {
        let group = self.group;
        let n = group.order();

        let pubkey = encode_compressed(group, &group.mul_generator(secret))?;
        let (rx, ry) = group
            .coordinates(&group.mul_generator(&nonce))
            .ok_or(PointDecodeError::Infinity)?;
        if jacobi_unsigned(&ry, group.field_prime())? == -1 {
            nonce = n - nonce;
        }

        let rx = int_to_bytes32(&rx);
        let e = challenge(&rx, &pubkey, msg);
        let s = (nonce + e * secret) % n;
        Ok(SchnorrSignature::from_parts(&rx, &int_to_bytes32(&s)))
    }

    /// Verify a signature over a 32-byte message digest.
    ///
    /// # Errors
    /// * `InvalidLength` - pubkey not 33/65 bytes, signature not 64, digest not 32
    /// * `PointDecode` - pubkey is not a valid finite curve point
    pub fn verify(&self, pubkey: &[u8], signature: &[u8], msg: &[u8]) -> Result<bool, SchnorrError> {
        if pubkey.len() != COMPRESSED_POINT_LEN && pubkey.len() != UNCOMPRESSED_POINT_LEN {
            return Err(SchnorrError::InvalidLength {
                field: "public key",
                expected: "33 or 65",
                actual: pubkey.len(),
            });
        }
        let signature = SchnorrSignature::from_slice(signature)?;
        expect_len("message digest", msg, SCALAR_LEN)?;

        let group = self.group;
        let point = self.decode_point(pubkey)?;

        let s = int_from_bytes(signature.s_bytes());
        if &s >= group.order() {
            tracing::trace!(reason = "s >= n", "Schnorr signature rejected");
            return Ok(false);
        }

        let mut rx = [0u8; SCALAR_LEN];
        rx.copy_from_slice(signature.r_bytes());
        // The challenge always commits to the compressed key
        let pubkey = encode_compressed(group, &point)?;
        let e = challenge(&rx, &pubkey, msg);

        let e_p = group.scalar_mul(&e, &point);
        let r_point = group.add(&group.mul_generator(&s), &group.negate(&e_p));
        let Some((x, y)) = group.coordinates(&r_point) else {
            tracing::trace!(reason = "R is infinity", "Schnorr signature rejected");
            return Ok(false);
        };
        if jacobi_unsigned(&y, group.field_prime())? != 1 {
            tracing::trace!(reason = "jacobi(R.y) != 1", "Schnorr signature rejected");
            return Ok(false);
        }

        Ok(int_to_bytes32(&x) == rx)
    }

    /// Decode a point honouring the configured probe window.
    pub(crate) fn decode_point(&self, bytes: &[u8]) -> Result<C::Point, SchnorrError> {
        decode_point_with_window(self.group, bytes, self.config.decompression_probe_window)
    }

    fn parse_secret(&self, privkey: &[u8]) -> Result<BigUint, SchnorrError> {
        expect_len("private key", privkey, SCALAR_LEN)?;
        let secret = int_from_bytes(privkey);
        if !in_open_range(&secret, self.group.order()) {
            return Err(SchnorrError::OutOfRange {
                field: "private key",
            });
        }
        Ok(secret)
    }
}

/// `SHA256(R.x ‖ compressed(P) ‖ m)` as a 256-bit integer.
pub(crate) fn challenge(
    rx: &[u8; SCALAR_LEN],
    pubkey: &[u8; COMPRESSED_POINT_LEN],
    msg: &[u8],
) -> BigUint {
    let mut hasher = Sha256::new();
    hasher.update(rx);
    hasher.update(pubkey);
    hasher.update(msg);
    BigUint::from_bytes_be(&hasher.finalize())
}
