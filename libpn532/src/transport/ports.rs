// libpn532/src/transport/ports.rs

use crate::{Error, Result};

/// Lists the serial ports currently present on the system.
pub trait PortEnumerator: Send {
    fn list(&self) -> Result<Vec<String>>;
}

impl<F> PortEnumerator for F
where
    F: Fn() -> Result<Vec<String>> + Send,
{
    fn list(&self) -> Result<Vec<String>> {
        self()
    }
}

/// `serialport::available_ports` backed enumeration.
#[cfg(feature = "serial")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPorts;

#[cfg(feature = "serial")]
impl PortEnumerator for SystemPorts {
    fn list(&self) -> Result<Vec<String>> {
        Ok(serialport::available_ports()?
            .into_iter()
            .map(|p| p.port_name)
            .collect())
    }
}

/// Watches the connected port and reports `Error::PortLost` once it drops
/// out of the enumerated set.
pub struct PortMonitor {
    enumerator: Box<dyn PortEnumerator>,
    port: String,
}

impl PortMonitor {
    pub fn new(enumerator: Box<dyn PortEnumerator>, port: impl Into<String>) -> Self {
        Self {
            enumerator,
            port: port.into(),
        }
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Enumeration failures are not treated as loss; only a successful
    /// listing without our port is.
    pub fn check(&self) -> Result<()> {
        match self.enumerator.list() {
            Ok(ports) if !ports.iter().any(|p| p == &self.port) => {
                log::warn!("Serial port {} is no longer present", self.port);
                Err(Error::PortLost {
                    port: self.port.clone(),
                })
            }
            Ok(_) => Ok(()),
            Err(e) => {
                log::debug!("port enumeration failed: {}", e);
                Ok(())
            }
        }
    }
}
