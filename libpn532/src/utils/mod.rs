//! Utilities for libpn532: small, reusable helpers used across the crate.
//!
//! Hex rendering for log lines and UID display, plus the timing defaults
//! shared by transports and the poll loop.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
