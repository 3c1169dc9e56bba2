//! Signer configuration and validation
//!
//! # Example
//!
//! ```
//! use cash_schnorr::SchnorrConfig;
//!
//! let config = SchnorrConfig::default()
//!     .with_decompression_probe_window(1)
//!     .with_blind_self_check(true);
//! config.validate().expect("valid config");
//! ```

use super::errors::SchnorrError;
use serde::{Deserialize, Serialize};

/// Upper bound of the decompression probe window.
pub const MAX_PROBE_WINDOW: usize = 128;

/// Tunables shared by the signer, the blind requester and the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchnorrConfig {
    /// How many x-coordinates (`x, x+1, …`) compressed-point decoding tries
    /// before giving up. 128 reproduces legacy serialized data; 1 is strict.
    pub decompression_probe_window: usize,
    /// Default for the `check` flag of `SchnorrService::finalize_blind`.
    pub blind_self_check: bool,
}

impl Default for SchnorrConfig {
    fn default() -> Self {
        Self {
            decompression_probe_window: MAX_PROBE_WINDOW,
            blind_self_check: true,
        }
    }
}

impl SchnorrConfig {
    /// Strict decoding: no x-offset probing.
    pub fn strict() -> Self {
        Self::default().with_decompression_probe_window(1)
    }

    /// Validate ranges.
    pub fn validate(&self) -> Result<(), SchnorrError> {
        if self.decompression_probe_window == 0 {
            return Err(SchnorrError::InvalidConfig(
                "decompression_probe_window cannot be 0".to_string(),
            ));
        }
        if self.decompression_probe_window > MAX_PROBE_WINDOW {
            return Err(SchnorrError::InvalidConfig(format!(
                "decompression_probe_window must be at most {MAX_PROBE_WINDOW}, got {}",
                self.decompression_probe_window
            )));
        }
        Ok(())
    }

    /// Builder-style method to set the probe window
    pub fn with_decompression_probe_window(mut self, window: usize) -> Self {
        self.decompression_probe_window = window;
        self
    }

    /// Builder-style method to set the blind self-check default
    pub fn with_blind_self_check(mut self, check: bool) -> Self {
        self.blind_self_check = check;
        self
    }
}
