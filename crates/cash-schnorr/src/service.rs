//! # Schnorr Service
//!
//! Application service implementing [`SchnorrApi`] over a curve backend.
//!
//! ## Architecture
//!
//! - Implements the inbound port (`SchnorrApi`)
//! - Uses the outbound port (`CurveGroup`) through the domain layer
//! - Owns the validated [`SchnorrConfig`] and applies it to every call

use crate::adapters::{secp256k1, Secp256k1};
use crate::domain::blind::{BlindRequester, BlindSigner};
use crate::domain::config::SchnorrConfig;
use crate::domain::entities::SchnorrSignature;
use crate::domain::errors::SchnorrError;
use crate::domain::schnorr::SchnorrSigner;
use crate::ports::inbound::SchnorrApi;
use crate::ports::outbound::CurveGroup;
use rand::rngs::OsRng;
use std::fmt;

/// Schnorr service bound to one curve and one configuration.
pub struct SchnorrService<'a, C: CurveGroup = Secp256k1> {
    signer: SchnorrSigner<'a, C>,
}

impl<C: CurveGroup> fmt::Debug for SchnorrService<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchnorrService")
            .field("signer", &self.signer)
            .finish()
    }
}

impl SchnorrService<'static, Secp256k1> {
    /// Service over the process-wide secp256k1 backend.
    ///
    /// # Errors
    /// * `CapabilityUnavailable` - no working secp256k1 backend
    /// * `InvalidConfig` - `config` fails validation
    pub fn secp256k1(config: SchnorrConfig) -> Result<Self, SchnorrError> {
        Self::new(secp256k1()?, config)
    }
}

impl<'a, C: CurveGroup> SchnorrService<'a, C> {
    /// Create a new service over `group`.
    pub fn new(group: &'a C, config: SchnorrConfig) -> Result<Self, SchnorrError> {
        let signer = SchnorrSigner::with_config(group, config)?;
        tracing::info!(
            curve = group.name(),
            probe_window = config.decompression_probe_window,
            blind_self_check = config.blind_self_check,
            "Schnorr service initialized"
        );
        Ok(Self { signer })
    }

    /// The active configuration.
    pub fn config(&self) -> &SchnorrConfig {
        self.signer.config()
    }

    /// The underlying signer.
    pub fn signer(&self) -> &SchnorrSigner<'a, C> {
        &self.signer
    }

    /// Open a signer-side blind session with a fresh OS-random nonce.
    pub fn open_blind_session(&self) -> Result<BlindSigner<'a, C>, SchnorrError> {
        BlindSigner::with_rng(self.signer.group(), &mut OsRng)
    }

    /// Blind `msg` for signing by the holder of `pubkey`.
    pub fn request_blind_signature(
        &self,
        pubkey: &[u8],
        commitment: &[u8],
        msg: &[u8],
    ) -> Result<BlindRequester<'a, C>, SchnorrError> {
        BlindRequester::with_rng(self.signer, pubkey, commitment, msg, &mut OsRng).inspect_err(
            |e| tracing::debug!(error = %e, "Blind signature request rejected"),
        )
    }

    /// Unblind a signer response, verifying it when `blind_self_check` is set.
    pub fn finalize_blind(
        &self,
        requester: &BlindRequester<'a, C>,
        partial: &[u8],
    ) -> Result<SchnorrSignature, SchnorrError> {
        requester.finalize(partial, self.config().blind_self_check)
    }
}

impl<C: CurveGroup> SchnorrApi for SchnorrService<'_, C> {
    fn public_key(&self, privkey: &[u8], compressed: bool) -> Result<Vec<u8>, SchnorrError> {
        self.signer.public_key(privkey, compressed)
    }

    fn sign(&self, privkey: &[u8], msg: &[u8]) -> Result<SchnorrSignature, SchnorrError> {
        self.signer
            .sign(privkey, msg)
            .inspect_err(|e| tracing::debug!(error = %e, "Schnorr signing rejected"))
    }

    fn verify(&self, pubkey: &[u8], signature: &[u8], msg: &[u8]) -> Result<bool, SchnorrError> {
        let verdict = self.signer.verify(pubkey, signature, msg);
        match &verdict {
            Ok(valid) => tracing::trace!(valid, "Schnorr signature checked"),
            Err(e) => tracing::debug!(error = %e, "Schnorr verification input rejected"),
        }
        verdict
    }
}
