#![cfg(feature = "serial")]

//! Wait for one tag on a PN532 and print what was read.
//!
//! Usage:
//!   cargo run -p libpn532 --example read_tag --features serial -- COM3
//!
//! Set `RUST_LOG=debug` to see every frame on the wire.

use std::time::Duration;

use libpn532::device::DeviceBuilder;
use libpn532::poll::{PollConfig, PollEvent, PollLoop};
use libpn532::transport::{PortMonitor, SystemPorts};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: read_tag <serial-port>"))?;

    let device = DeviceBuilder::new().with_serial_port(&port)?.build()?;
    if let Some(fw) = device.firmware() {
        println!("Opened {}: {}", port, fw);
    }

    let config = PollConfig {
        interval: Duration::from_millis(300),
        ..PollConfig::default()
    };
    let mut poll = PollLoop::new(device, config)
        .with_monitor(PortMonitor::new(Box::new(SystemPorts), port.clone()));

    println!("Waiting for a tag...");
    let mut events: Vec<PollEvent> = Vec::new();
    match poll.run(&mut events)? {
        Some(reading) => println!("{}", reading),
        None => println!("Cancelled"),
    }

    poll.into_device().close()?;
    Ok(())
}
