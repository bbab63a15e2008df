#[path = "../common/mod.rs"]
mod common;

use libpn532::transport::{MockTransport, Transport};
use libpn532::Error;

#[test]
fn clones_share_queue_and_log() {
    let probe = MockTransport::new();
    let mut t: Box<dyn Transport> = Box::new(probe.clone());

    probe.push_response(common::fixtures::firmware_reply_frame());
    t.send(&common::fixtures::sam_configuration_frame()).unwrap();

    assert_eq!(probe.sent(), vec![common::fixtures::sam_configuration_frame()]);
    assert_eq!(t.receive(500).unwrap(), common::fixtures::firmware_reply_frame());
    assert_eq!(probe.pending_responses(), 0);
}

#[test]
fn queued_timeout_then_reply() {
    let mut t = MockTransport::new();
    t.push_timeout();
    t.push_response(vec![0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]);

    assert!(matches!(t.receive(10), Err(Error::ReadTimeout)));
    assert_eq!(t.receive(10).unwrap().len(), 6);
    assert!(matches!(t.receive(10), Err(Error::ReadTimeout)));
}

#[test]
fn closed_link_rejects_io() {
    let probe = MockTransport::with_port("/dev/ttyUSB0");
    let mut t = probe.clone();
    assert_eq!(t.port_name().as_deref(), Some("/dev/ttyUSB0"));

    t.close().unwrap();
    assert!(probe.is_closed());
    assert!(matches!(t.send(&[0x00]), Err(Error::LinkClosed)));
}
