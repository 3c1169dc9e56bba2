//! Scalar helpers: byte conversion, range checks and CSPRNG sampling.

use super::errors::SchnorrError;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Width of every serialized scalar and field coordinate.
pub const SCALAR_LEN: usize = 32;

/// Big-endian bytes to integer.
pub fn int_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Integer to 32 big-endian bytes, left padded.
///
/// Only the low 256 bits are kept; callers pass values already reduced
/// below `n` or `p`.
pub fn int_to_bytes32(value: &BigUint) -> [u8; SCALAR_LEN] {
    let raw = value.to_bytes_be();
    let tail = &raw[raw.len().saturating_sub(SCALAR_LEN)..];
    let mut out = [0u8; SCALAR_LEN];
    out[SCALAR_LEN - tail.len()..].copy_from_slice(tail);
    out
}

/// `0 < value < n`
pub fn in_open_range(value: &BigUint, n: &BigUint) -> bool {
    *value != BigUint::from(0u8) && value < n
}

/// `(a - b) mod n` for `a < n`.
pub fn mod_sub(a: &BigUint, b: &BigUint, n: &BigUint) -> BigUint {
    (a + n - (b % n)) % n
}

/// Reject inputs whose length is not exactly `expected`.
pub fn expect_len(field: &'static str, bytes: &[u8], expected: usize) -> Result<(), SchnorrError> {
    if bytes.len() != expected {
        return Err(SchnorrError::InvalidLength {
            field,
            expected: match expected {
                32 => "32",
                64 => "64",
                _ => "fixed size",
            },
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Draw a uniform scalar in `(0, n)` by rejection sampling.
///
/// `n` must be at least 2.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R, n: &BigUint) -> BigUint {
    let bits = n.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;
    let mut buf = Zeroizing::new(vec![0u8; len]);
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xFFu8 >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if in_open_range(&candidate, n) {
            return candidate;
        }
    }
}
