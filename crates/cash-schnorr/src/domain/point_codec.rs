//! # Point Codec
//!
//! SEC1-style point serialization:
//! - compressed: `[0x02 | 0x03] ‖ x (32)`, low prefix bit = `y mod 2`
//! - uncompressed: `0x04 ‖ x (32) ‖ y (32)`
//!
//! ## Compatibility Shim
//!
//! Compressed decoding probes `x, x+1, …` (up to 128 values) until it finds
//! a square `y²`, then pairs that `y` with the encoded `x`. A shifted `y`
//! never lies on the curve with the encoded `x`, so an encoding whose `x`
//! has no point fails with `NotOnCurve` instead of naming the point at the
//! shifted `x`. The shift is not a security feature and strict callers
//! should use a probe window of 1, which fails with `NoCurvePoint`.

use super::config::MAX_PROBE_WINDOW;
use super::entities::{COMPRESSED_POINT_LEN, UNCOMPRESSED_POINT_LEN};
use super::errors::{PointDecodeError, SchnorrError};
use super::scalar::{int_from_bytes, int_to_bytes32, SCALAR_LEN};
use crate::ports::outbound::CurveGroup;
use num_bigint::BigUint;

/// Serialize a finite point in compressed or uncompressed form.
pub fn encode_point<C: CurveGroup>(
    group: &C,
    point: &C::Point,
    compressed: bool,
) -> Result<Vec<u8>, SchnorrError> {
    if compressed {
        Ok(encode_compressed(group, point)?.to_vec())
    } else {
        Ok(encode_uncompressed(group, point)?.to_vec())
    }
}

/// Serialize a finite point as 33 bytes.
pub fn encode_compressed<C: CurveGroup>(
    group: &C,
    point: &C::Point,
) -> Result<[u8; COMPRESSED_POINT_LEN], SchnorrError> {
    let (x, y) = group
        .coordinates(point)
        .ok_or(PointDecodeError::Infinity)?;
    let mut out = [0u8; COMPRESSED_POINT_LEN];
    out[0] = 0x02 | u8::from(is_odd(&y));
    out[1..].copy_from_slice(&int_to_bytes32(&x));
    Ok(out)
}

/// Serialize a finite point as 65 bytes.
pub fn encode_uncompressed<C: CurveGroup>(
    group: &C,
    point: &C::Point,
) -> Result<[u8; UNCOMPRESSED_POINT_LEN], SchnorrError> {
    let (x, y) = group
        .coordinates(point)
        .ok_or(PointDecodeError::Infinity)?;
    let mut out = [0u8; UNCOMPRESSED_POINT_LEN];
    out[0] = 0x04;
    out[1..1 + SCALAR_LEN].copy_from_slice(&int_to_bytes32(&x));
    out[1 + SCALAR_LEN..].copy_from_slice(&int_to_bytes32(&y));
    Ok(out)
}

/// Decode with the legacy probe window.
pub fn decode_point<C: CurveGroup>(group: &C, bytes: &[u8]) -> Result<C::Point, SchnorrError> {
    decode_point_with_window(group, bytes, MAX_PROBE_WINDOW)
}

/// Decode a compressed or uncompressed point.
///
/// `probe_window` bounds how many x-coordinates compressed decoding tries.
pub fn decode_point_with_window<C: CurveGroup>(
    group: &C,
    bytes: &[u8],
    probe_window: usize,
) -> Result<C::Point, SchnorrError> {
    let prefix = *bytes.first().ok_or(PointDecodeError::Empty)?;
    match prefix {
        0x02 | 0x03 => {
            check_len(prefix, bytes, COMPRESSED_POINT_LEN)?;
            let x = int_from_bytes(&bytes[1..]);
            Ok(decompress(group, &x, prefix == 0x03, probe_window)?)
        }
        0x04 => {
            check_len(prefix, bytes, UNCOMPRESSED_POINT_LEN)?;
            let x = int_from_bytes(&bytes[1..1 + SCALAR_LEN]);
            let y = int_from_bytes(&bytes[1 + SCALAR_LEN..]);
            let point = group
                .from_coordinates(&x, &y)
                .ok_or(PointDecodeError::NotOnCurve)?;
            Ok(point)
        }
        other => Err(PointDecodeError::InvalidPrefix(other).into()),
    }
}

fn check_len(prefix: u8, bytes: &[u8], expected: usize) -> Result<(), PointDecodeError> {
    if bytes.len() != expected {
        return Err(PointDecodeError::InvalidLength {
            prefix,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Recover `y` from `x` and a parity bit, probing forward from `x`.
///
/// The point is always built from the encoded `x`.
/// Relies on `p ≡ 3 (mod 4)`: `y = (y²)^((p+1)/4) mod p`.
fn decompress<C: CurveGroup>(
    group: &C,
    x: &BigUint,
    odd: bool,
    probe_window: usize,
) -> Result<C::Point, PointDecodeError> {
    let p = group.field_prime();
    let (a, b) = group.coefficients();
    let sqrt_exp = (p + 1u8) >> 2u8;
    let three = BigUint::from(3u8);

    for offset in 0..probe_window {
        let candidate = x + BigUint::from(offset);
        if &candidate >= p {
            break;
        }
        let y_squared = (candidate.modpow(&three, p) + a * &candidate + b) % p;
        let root = y_squared.modpow(&sqrt_exp, p);
        if &root * &root % p != y_squared {
            continue;
        }
        let y = if is_odd(&root) == odd {
            root
        } else {
            (p - &root) % p
        };
        return group
            .from_coordinates(x, &y)
            .ok_or(PointDecodeError::NotOnCurve);
    }
    Err(PointDecodeError::NoCurvePoint)
}

fn is_odd(value: &BigUint) -> bool {
    value.to_bytes_le().first().is_some_and(|b| b & 1 == 1)
}
