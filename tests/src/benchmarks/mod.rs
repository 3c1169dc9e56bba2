//! # Cash Schnorr Benchmarks
//!
//! Criterion benchmarks for signing, verification and the blind protocol.

pub mod schnorr;
