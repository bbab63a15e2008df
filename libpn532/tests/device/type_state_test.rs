#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder, DeviceConfig};
use libpn532::test_support;
use libpn532::transport::mock::MockTransport;
use libpn532::transport::Transport;

#[test]
fn initialize_transitions_and_reads_firmware() {
    let m = MockTransport::with_port("/dev/ttyUSB0");
    for reply in test_support::init_replies() {
        m.push_response(reply);
    }

    let boxed: Box<dyn Transport> = Box::new(m);
    let device = Device::new_with_transport(boxed).unwrap();
    assert_eq!(device.port_name().as_deref(), Some("/dev/ttyUSB0"));

    let initialized = device.initialize().unwrap();
    let fw = initialized.firmware().unwrap();
    assert_eq!(fw.to_string(), "PN532 firmware 1.6 (support 0x07)");
}

#[test]
fn initialize_fails_without_reply() {
    let device = DeviceBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .with_config(DeviceConfig::default())
        .build_uninitialized()
        .unwrap();
    assert!(matches!(
        device.initialize(),
        Err(libpn532::Error::ReadTimeout)
    ));
}

#[test]
fn builder_build_runs_init() {
    let m = MockTransport::new();
    for reply in test_support::init_replies() {
        m.push_response(reply);
    }
    let dev = DeviceBuilder::new()
        .with_transport(Box::new(m))
        .build()
        .unwrap();
    assert_eq!(dev.firmware().map(|f| f.ic), Some(0x32));
}
