//! # Jacobi Symbol
//!
//! Iterative binary Jacobi symbol (HAC algorithm 2.149, no recursion).
//!
//! Used to canonicalize the sign of a point's y-coordinate: a signature's
//! nonce point must have `(R.y / p) = +1`.

use super::errors::SchnorrError;
use num_bigint::{BigInt, BigUint, Sign};

/// Jacobi symbol `(a / n)` for any integer `a`.
///
/// Returns -1, 0 or +1. `n` must be odd and at least 3.
pub fn jacobi(a: &BigInt, n: &BigUint) -> Result<i8, SchnorrError> {
    if !is_valid_modulus(n) {
        return Err(SchnorrError::InvalidModulus);
    }
    let modulus = BigInt::from_biguint(Sign::Plus, n.clone());
    let mut reduced = a % &modulus;
    if reduced.sign() == Sign::Minus {
        reduced += &modulus;
    }
    jacobi_unsigned(reduced.magnitude(), n)
}

/// Jacobi symbol `(a / n)` for non-negative `a`.
pub fn jacobi_unsigned(a: &BigUint, n: &BigUint) -> Result<i8, SchnorrError> {
    if !is_valid_modulus(n) {
        return Err(SchnorrError::InvalidModulus);
    }

    let one = BigUint::from(1u8);
    let mut a = a % n;
    let mut n = n.clone();
    let mut symbol: i8 = 1;

    while a > one {
        // a > 1 so there is at least one set bit
        let twos = a.trailing_zeros().unwrap_or(0);
        let odd = &a >> twos;

        let n_low = low_byte(&n);
        if twos & 1 == 1 && n_low & 7 != 1 && n_low & 7 != 7 {
            symbol = -symbol;
        }
        if odd == one {
            return Ok(symbol);
        }
        if n_low & 3 == 3 && low_byte(&odd) & 3 == 3 {
            symbol = -symbol;
        }

        a = &n % &odd;
        n = odd;
    }

    if a == BigUint::from(0u8) {
        Ok(0)
    } else {
        Ok(symbol)
    }
}

fn is_valid_modulus(n: &BigUint) -> bool {
    *n >= BigUint::from(3u8) && low_byte(n) & 1 == 1
}

fn low_byte(value: &BigUint) -> u8 {
    value.to_bytes_le().first().copied().unwrap_or(0)
}
