// libpn532/src/device/config.rs

use std::time::Duration;

use crate::utils::{ms, timeout};

/// When to send an ACK back to the PN532 after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AckEcho {
    /// Never echo.
    Never,
    /// Echo as soon as the received buffer starts with an ACK.
    #[default]
    OnAck,
    /// Echo only once the expected response prefix was found.
    OnMatch,
}

/// Link and exchange settings for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub repoll_delay: Duration,
    pub ack_echo: AckEcho,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            read_timeout: timeout::default_read_timeout(),
            write_timeout: timeout::default_write_timeout(),
            repoll_delay: ms(timeout::DEFAULT_REPOLL_DELAY_MS),
            ack_echo: AckEcho::default(),
        }
    }
}

impl DeviceConfig {
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_ack_echo(mut self, ack_echo: AckEcho) -> Self {
        self.ack_echo = ack_echo;
        self
    }

    pub(crate) fn read_timeout_ms(&self) -> u64 {
        self.read_timeout.as_millis().try_into().unwrap_or(u64::MAX)
    }
}
