//! # Schnorr Errors
//!
//! Error types for signing, verification and the blind-signature protocol.
//!
//! All variants are local, recoverable conditions handed back to the
//! immediate caller. Nothing here is retried internally.

use thiserror::Error;

/// Errors that can occur during Schnorr operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchnorrError {
    /// An input had the wrong byte length.
    #[error("Invalid {field} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Name of the offending input
        field: &'static str,
        /// Accepted length(s), human readable
        expected: &'static str,
        /// Length actually supplied
        actual: usize,
    },

    /// A scalar was outside the open interval `(0, n)`.
    #[error("{field} out of range: must satisfy 0 < x < n")]
    OutOfRange {
        /// Name of the offending scalar
        field: &'static str,
    },

    /// A point encoding could not be turned into a finite curve point.
    #[error(transparent)]
    PointDecode(#[from] PointDecodeError),

    /// A `BlindSigner` was asked to sign after its nonce was consumed.
    #[error("Blind signer nonce already consumed: a new session is required")]
    SingleUseViolation,

    /// The unblinded signature did not verify under the signer's key.
    #[error("Blind signature verification failed")]
    VerificationMismatch,

    /// The curve backend is not compiled in or failed its self-test.
    #[error("Cryptographic capability unavailable: {0}")]
    CapabilityUnavailable(&'static str),

    /// The deterministic nonce function only supports 256-bit orders.
    #[error("Nonce derivation requires a 256-bit group order, got {bits} bits")]
    UnsupportedOrder {
        /// Bit length of the supplied order
        bits: u64,
    },

    /// Jacobi symbol modulus was even or smaller than 3.
    #[error("Jacobi modulus must be odd and at least 3")]
    InvalidModulus,

    /// The blinded commitment was the identity or had Jacobi symbol 0.
    ///
    /// Cryptographically negligible; the caller may retry with a fresh
    /// request.
    #[error("Degenerate blinding factors: retry with a fresh request")]
    DegenerateBlinding,

    /// A configuration value was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Reasons a serialized point was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PointDecodeError {
    /// Zero-length input
    #[error("Point decode failed: empty input")]
    Empty,

    /// First byte was not 0x02, 0x03 or 0x04
    #[error("Point decode failed: invalid prefix byte 0x{0:02x}")]
    InvalidPrefix(u8),

    /// Length does not match the prefix
    #[error("Point decode failed: prefix 0x{prefix:02x} needs {expected} bytes, got {actual}")]
    InvalidLength {
        /// Prefix byte of the encoding
        prefix: u8,
        /// Length implied by the prefix
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// No y-coordinate exists within the decompression probe window
    #[error("Point decode failed: no curve point for x-coordinate")]
    NoCurvePoint,

    /// Uncompressed coordinates do not satisfy the curve equation
    #[error("Point decode failed: point is not on the curve")]
    NotOnCurve,

    /// The point at infinity where a finite point is required
    #[error("Point decode failed: point at infinity")]
    Infinity,
}
