#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::Response;
use libpn532::types::Atqa;

#[test]
fn decode_detect_response() {
    let mut body = vec![0xD5, 0x4B, 0x01, 0x01, 0x00, 0x44, 0x00, 0x07];
    body.extend_from_slice(&common::fixtures::sample_uid_bytes());

    match Response::decode(0x4A, &body).unwrap() {
        Response::InListPassiveTarget(Some(t)) => {
            assert_eq!(t.atqa, Atqa::new(0x0044));
            assert_eq!(t.sak, 0x00);
            assert_eq!(t.uid, common::fixtures::sample_uid());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn decode_general_status() {
    let body = [0xD5, 0x05, 0x00, 0x01, 0x00, 0x80];
    match Response::decode(0x04, &body).unwrap() {
        Response::GeneralStatus(status) => {
            assert_eq!(status.last_error, 0);
            assert!(status.field_present);
            assert_eq!(status.targets, 0);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn decode_exchange_masks_status_flags() {
    // MI bit set alongside status 0
    let body = [0xD5, 0x41, 0x40, 0xAA];
    assert_eq!(
        Response::decode(0x40, &body).unwrap(),
        Response::InDataExchange {
            status: 0,
            data: vec![0xAA]
        }
    );
}
