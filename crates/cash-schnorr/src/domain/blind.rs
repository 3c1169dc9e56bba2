//! # Two-Party Blind Schnorr Signatures
//!
//! The signer learns neither the message nor the final signature:
//!
//! ```text
//! Signer                               Requester (P, m)
//! k ←$ (0, n), R = k·G       ── R ──▶
//!                                      a, b ←$ (0, n)
//!                                      R' = R + a·G + b·P, c = jacobi(R'.y)
//!                                      e  = c·SHA256(R'.x ‖ P ‖ m) + b
//!                            ◀── e ──
//! s = k + e·x                ── s ──▶
//!                                      s' = c·(s + a), σ = R'.x ‖ s'
//! ```
//!
//! `σ` verifies under the ordinary [`SchnorrSigner::verify`].
//!
//! ## Single Use
//!
//! A [`BlindSigner`] answers exactly one challenge. Two responses under the
//! same `k` reveal the private key, so the second call to
//! [`BlindSigner::sign`] fails with [`SchnorrError::SingleUseViolation`],
//! including when two threads race for it.
//!
//! ## Security Notes
//!
//! - Do not blind-sign with keys that are related to each other, such as
//!   BIP32 siblings. A response under one key can help forge under another.
//! - Do not keep many sessions open in parallel against one key. Concurrent
//!   sessions enable the forgery attacks of Schnorr (2001) and Wagner (2002),
//!   so answer challenges one session at a time.
//! - The consumed nonce and the private key pass through `BigUint`
//!   arithmetic, which is neither zeroized nor constant time. Only the stored
//!   nonce is wiped.

use super::entities::{SchnorrSignature, COMPRESSED_POINT_LEN};
use super::errors::SchnorrError;
use super::jacobi::jacobi_unsigned;
use super::point_codec::encode_compressed;
use super::schnorr::{challenge, SchnorrSigner};
use super::scalar::{expect_len, in_open_range, int_from_bytes, int_to_bytes32, random_scalar, SCALAR_LEN};
use crate::adapters::{secp256k1, Secp256k1};
use crate::ports::outbound::CurveGroup;
use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::Zeroizing;

// =============================================================================
// SIGNER SIDE
// =============================================================================

/// One blind-signing session holding a fresh secret nonce.
pub struct BlindSigner<'a, C: CurveGroup = Secp256k1> {
    group: &'a C,
    nonce: Mutex<Option<Zeroizing<[u8; SCALAR_LEN]>>>,
    commitment: [u8; COMPRESSED_POINT_LEN],
}

impl BlindSigner<'static, Secp256k1> {
    /// Open a session over secp256k1 with a nonce from the OS CSPRNG.
    pub fn new() -> Result<Self, SchnorrError> {
        Self::with_rng(secp256k1()?, &mut OsRng)
    }
}

impl<'a, C: CurveGroup> BlindSigner<'a, C> {
    /// Open a session drawing the nonce from `rng`.
    pub fn with_rng<R: RngCore + CryptoRng>(group: &'a C, rng: &mut R) -> Result<Self, SchnorrError> {
        let k = random_scalar(rng, group.order());
        let commitment = encode_compressed(group, &group.mul_generator(&k))?;
        tracing::debug!(curve = group.name(), "Blind signing session opened");
        Ok(Self {
            group,
            nonce: Mutex::new(Some(Zeroizing::new(int_to_bytes32(&k)))),
            commitment,
        })
    }

    /// Compressed nonce commitment `R = k·G`, sent to the requester.
    pub fn get_commitment(&self) -> [u8; COMPRESSED_POINT_LEN] {
        self.commitment
    }

    /// Whether the nonce has already been spent.
    pub fn is_consumed(&self) -> bool {
        self.nonce.lock().is_none()
    }

    /// Answer the requester's blinded challenge with `s = k + e·x mod n`.
    ///
    /// Input validation happens before the nonce is taken, so a malformed
    /// call leaves the session usable.
    ///
    /// # Errors
    /// * `InvalidLength` - key or challenge is not 32 bytes
    /// * `OutOfRange` - key is not in `(0, n)`
    /// * `SingleUseViolation` - the nonce was already used
    pub fn sign(&self, privkey: &[u8], challenge: &[u8]) -> Result<[u8; SCALAR_LEN], SchnorrError> {
        expect_len("private key", privkey, SCALAR_LEN)?;
        expect_len("challenge", challenge, SCALAR_LEN)?;
        let n = self.group.order();
        let secret = int_from_bytes(privkey);
        if !in_open_range(&secret, n) {
            return Err(SchnorrError::OutOfRange {
                field: "private key",
            });
        }

        let nonce = self.nonce.lock().take().ok_or_else(|| {
            tracing::warn!(
                commitment = %hex::encode(self.commitment),
                "Blind signer asked to sign twice with the same nonce"
            );
            SchnorrError::SingleUseViolation
        })?;

        let s = (int_from_bytes(&nonce[..]) + int_from_bytes(challenge) * secret) % n;
        drop(nonce);
        tracing::debug!("Blind signing nonce consumed");
        Ok(int_to_bytes32(&s))
    }
}

impl<C: CurveGroup> fmt::Debug for BlindSigner<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlindSigner")
            .field("curve", &self.group.name())
            .field("commitment", &hex::encode(self.commitment))
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

// =============================================================================
// REQUESTER SIDE
// =============================================================================

/// The requester's half of a blind-signing session.
pub struct BlindRequester<'a, C: CurveGroup = Secp256k1> {
    signer: SchnorrSigner<'a, C>,
    pubkey: Vec<u8>,
    message: [u8; SCALAR_LEN],
    alpha: Zeroizing<[u8; SCALAR_LEN]>,
    negated: bool,
    rx: [u8; SCALAR_LEN],
    request: [u8; SCALAR_LEN],
}

impl BlindRequester<'static, Secp256k1> {
    /// Blind `msg` against signer key `pubkey` and commitment over secp256k1.
    pub fn new(pubkey: &[u8], commitment: &[u8], msg: &[u8]) -> Result<Self, SchnorrError> {
        Self::with_rng(SchnorrSigner::new()?, pubkey, commitment, msg, &mut OsRng)
    }
}

impl<'a, C: CurveGroup> BlindRequester<'a, C> {
    /// Blind `msg` drawing the blinding factors from `rng`.
    ///
    /// `signer` supplies the curve and the decoding configuration.
    ///
    /// # Errors
    /// * `InvalidLength` - `msg` is not 32 bytes
    /// * `PointDecode` - `pubkey` or `commitment` does not decode
    /// * `DegenerateBlinding` - `R'` is the identity or `R'.y = 0`; retry with
    ///   fresh randomness
    pub fn with_rng<R: RngCore + CryptoRng>(
        signer: SchnorrSigner<'a, C>,
        pubkey: &[u8],
        commitment: &[u8],
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Self, SchnorrError> {
        expect_len("message digest", msg, SCALAR_LEN)?;
        let group = signer.group();
        let n = group.order();
        let pub_point = signer.decode_point(pubkey)?;
        let r_point = signer.decode_point(commitment)?;

        let alpha = random_scalar(rng, n);
        let beta = random_scalar(rng, n);
        let blinded = group.add(
            &group.add(&r_point, &group.mul_generator(&alpha)),
            &group.scalar_mul(&beta, &pub_point),
        );
        let (x, y) = group
            .coordinates(&blinded)
            .ok_or(SchnorrError::DegenerateBlinding)?;
        let negated = match jacobi_unsigned(&y, group.field_prime())? {
            1 => false,
            -1 => true,
            _ => return Err(SchnorrError::DegenerateBlinding),
        };

        let rx = int_to_bytes32(&x);
        let e0 = challenge(&rx, &encode_compressed(group, &pub_point)?, msg) % n;
        let e = if negated {
            (n - e0 + &beta) % n
        } else {
            (e0 + &beta) % n
        };

        let mut message = [0u8; SCALAR_LEN];
        message.copy_from_slice(msg);
        tracing::debug!(curve = group.name(), "Blind signature request prepared");
        Ok(Self {
            signer,
            pubkey: pubkey.to_vec(),
            message,
            alpha: Zeroizing::new(int_to_bytes32(&alpha)),
            negated,
            rx,
            request: int_to_bytes32(&e),
        })
    }

    /// The blinded challenge `e`, sent to the signer.
    pub fn get_request(&self) -> [u8; SCALAR_LEN] {
        self.request
    }

    /// Whether `jacobi(R'.y) = -1` forced the final negation.
    pub(crate) fn is_negated(&self) -> bool {
        self.negated
    }

    /// Unblind the signer's response into `R'.x ‖ c·(s + a)`.
    ///
    /// With `check` set, the result is verified against the signer key and
    /// message before being returned.
    ///
    /// # Errors
    /// * `InvalidLength` - `partial` is not 32 bytes
    /// * `VerificationMismatch` - `check` is set and the result does not verify
    pub fn finalize(&self, partial: &[u8], check: bool) -> Result<SchnorrSignature, SchnorrError> {
        expect_len("partial signature", partial, SCALAR_LEN)?;
        let n = self.signer.group().order();
        let sum = (int_from_bytes(partial) + int_from_bytes(&self.alpha[..])) % n;
        let s = if self.negated { (n - sum) % n } else { sum };
        let signature = SchnorrSignature::from_parts(&self.rx, &int_to_bytes32(&s));

        if check && !self.signer.verify(&self.pubkey, signature.as_bytes(), &self.message)? {
            tracing::warn!("Unblinded signature failed verification");
            return Err(SchnorrError::VerificationMismatch);
        }
        Ok(signature)
    }
}

impl<C: CurveGroup> fmt::Debug for BlindRequester<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlindRequester")
            .field("curve", &self.signer.group().name())
            .field("request", &hex::encode(self.request))
            .finish_non_exhaustive()
    }
}
