// libpn532/src/transport/mod.rs

pub mod mock;
pub mod ports;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::MockTransport;
pub use ports::{PortEnumerator, PortMonitor};
#[cfg(feature = "serial")]
pub use ports::SystemPorts;
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::Transport;
