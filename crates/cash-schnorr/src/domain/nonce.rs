//! # Deterministic Nonces (RFC 6979, libsecp256k1 style)
//!
//! HMAC-SHA256 DRBG seeded from `privkey ‖ msg ‖ ndata ‖ algo16`.
//!
//! ## Security Notes
//!
//! - Identical inputs always yield the identical nonce.
//! - Each signature scheme over the same key must use its own 16-byte
//!   algorithm tag, otherwise one scheme's nonce is derivable from another's.
//! - Only 256-bit orders are supported: each candidate is one HMAC block.

use super::errors::SchnorrError;
use super::scalar::{expect_len, in_open_range, int_from_bytes, SCALAR_LEN};
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha256;
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;

/// Algorithm tag for BCH-style Schnorr over SHA-256.
pub const ALGO16_SCHNORR_SHA256: &[u8; 16] = b"Schnorr+SHA256  ";

/// Derive a nonce in `(0, order)`.
///
/// `algo16` must be empty or 16 bytes, `ndata` empty or 32 bytes.
pub fn nonce_rfc6979(
    order: &BigUint,
    privkey: &[u8],
    msg32: &[u8],
    algo16: &[u8],
    ndata: &[u8],
) -> Result<BigUint, SchnorrError> {
    expect_len("private key", privkey, SCALAR_LEN)?;
    expect_len("message digest", msg32, SCALAR_LEN)?;
    if !(algo16.is_empty() || algo16.len() == 16) {
        return Err(SchnorrError::InvalidLength {
            field: "algorithm tag",
            expected: "0 or 16",
            actual: algo16.len(),
        });
    }
    if !(ndata.is_empty() || ndata.len() == 32) {
        return Err(SchnorrError::InvalidLength {
            field: "extra entropy",
            expected: "0 or 32",
            actual: ndata.len(),
        });
    }
    if order.bits() != 256 {
        return Err(SchnorrError::UnsupportedOrder { bits: order.bits() });
    }

    let mut blob = Zeroizing::new(Vec::with_capacity(112));
    blob.extend_from_slice(privkey);
    blob.extend_from_slice(msg32);
    blob.extend_from_slice(ndata);
    blob.extend_from_slice(algo16);

    let mut v = Zeroizing::new([0x01u8; 32]);
    let mut k = Zeroizing::new([0x00u8; 32]);

    *k = hmac_sha256(&k, &[&v[..], &[0x00u8][..], &blob[..]])?;
    *v = hmac_sha256(&k, &[&v[..]])?;
    *k = hmac_sha256(&k, &[&v[..], &[0x01u8][..], &blob[..]])?;
    *v = hmac_sha256(&k, &[&v[..]])?;

    loop {
        // RFC 6979 3.2.h: one block already covers the 256-bit order
        *v = hmac_sha256(&k, &[&v[..]])?;
        let candidate = int_from_bytes(&v[..]);
        if in_open_range(&candidate, order) {
            return Ok(candidate);
        }
        *k = hmac_sha256(&k, &[&v[..], &[0x00u8][..]])?;
        *v = hmac_sha256(&k, &[&v[..]])?;
    }
}

fn hmac_sha256(key: &[u8; 32], parts: &[&[u8]]) -> Result<[u8; 32], SchnorrError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .map_err(|_| SchnorrError::CapabilityUnavailable("HMAC-SHA256 rejected key"))?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().into())
}
