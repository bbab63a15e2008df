//! Timeout helpers used across the crate.
//!
//! Centralizes the UART timing defaults so the transport, the command
//! channel and the poll loop agree on them.

use std::time::Duration;

/// Read window for one response.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 500;

/// Write timeout for the serial handle.
pub const DEFAULT_WRITE_TIMEOUT_MS: u64 = 5000;

/// Extra wait after the first read to pick up trailing buffered bytes.
pub const DEFAULT_REPOLL_DELAY_MS: u64 = 50;

/// Pause between two "no tag" detection attempts.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Convenience: default write timeout as Duration.
pub fn default_write_timeout() -> Duration {
    ms(DEFAULT_WRITE_TIMEOUT_MS)
}
