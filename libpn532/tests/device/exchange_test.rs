#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::{PN532_ACK, PN532_WAKEUP};
use libpn532::protocol::Command;
use libpn532::test_support::{exchange_reply, target_reply};
use libpn532::Error;

#[test]
fn every_command_carries_wakeup() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_response(target_reply(None));
    let _ = dev.detect();

    let frames: Vec<_> = mock
        .sent()
        .into_iter()
        .filter(|w| w.as_slice() != PN532_ACK)
        .collect();
    // SAM, firmware, detect
    assert_eq!(frames.len(), 3);
    for w in frames {
        assert_eq!(&w[..16], &PN532_WAKEUP);
    }
}

#[test]
fn exchange_matches_after_ack() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_response(exchange_reply(0x00, &[1, 2, 3, 4]));
    let res = dev
        .exchange(&Command::exchange(libpn532::protocol::TagCommand::Read { page: 4 }))
        .unwrap();
    assert!(res.matched);
    assert_eq!(res.payload, vec![0xD5, 0x41, 0x00, 1, 2, 3, 4]);
}

#[test]
fn general_status_roundtrip() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_response(libpn532::test_support::ack_and_frame(&[
        0x05, 0x00, 0x00, 0x00, 0x80,
    ]));
    let status = dev.general_status().unwrap();
    assert!(!status.field_present);
}

#[test]
fn write_page_rejected() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_response(exchange_reply(0x01, &[]));
    assert!(matches!(
        dev.write_page(4, [0; 4]),
        Err(Error::TagStatus { status: 0x01 })
    ));
}

#[test]
fn timeout_is_benign() {
    let (_mock, mut dev) = common::helpers::mock_device();
    let err = dev.detect().unwrap_err();
    assert!(matches!(err, Error::ReadTimeout));
    assert!(err.is_benign());
}
