// libpn532/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::{AckEcho, DeviceConfig};
pub use handle::{Device, ExchangeResult, Initialized, Uninitialized};
