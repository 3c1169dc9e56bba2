//! # Ports Layer
//!
//! - `inbound`: the API this crate offers
//! - `outbound`: the curve group it needs

pub mod inbound;
pub mod outbound;
