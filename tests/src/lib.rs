//! # Cash Schnorr Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks
//! │   └── schnorr.rs
//! │
//! ├── exploits/         # Attack simulations
//! │   ├── nonce_reuse.rs
//! │   └── tampering.rs
//! │
//! └── integration/      # End-to-end flows
//!     ├── blind_flow.rs
//!     └── signing_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cash-schnorr-tests
//!
//! # By category
//! cargo test -p cash-schnorr-tests integration::
//! cargo test -p cash-schnorr-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p cash-schnorr-tests
//! ```
//!
//! Set `RUST_LOG=cash_schnorr=trace` to see the library's events.

#![allow(dead_code)]

pub mod benchmarks;

/// Install a test-writer subscriber once. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
