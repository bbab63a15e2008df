// libpn532/src/device/builder.rs

use crate::device::config::DeviceConfig;
use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: DeviceConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Open a serial port with the configured write timeout and re-poll
    /// delay.
    #[cfg(feature = "serial")]
    pub fn with_serial_port(self, port: &str) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open_with(
            port,
            self.config.write_timeout,
            self.config.repoll_delay,
        )?;
        Ok(self.with_transport(Box::new(transport)))
    }

    /// Consume the builder and return an uninitialized Device.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Device::with_config(t, self.config),
            None => Err(Error::PortUnavailable {
                port: String::new(),
                reason: "no transport configured".to_string(),
            }),
        }
    }

    /// Build and run the initialization sequence.
    pub fn build(self) -> Result<Device<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
