#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::codec::{encode_command_frame, find_response_prefix, response_body};
use libpn532::protocol::{Command, Frame};
use proptest::prelude::*;

#[test]
fn sam_configuration_frame_matches_fixture() {
    let frame = encode_command_frame(&Command::SamConfiguration).unwrap();
    assert_eq!(frame, common::fixtures::sam_configuration_frame());
}

#[test]
fn firmware_reply_body_extracted() {
    let mut buf = libpn532::constants::PN532_ACK.to_vec();
    buf.extend_from_slice(&common::fixtures::firmware_reply_frame());

    let off = find_response_prefix(&buf, [0xD5, 0x03]).unwrap();
    assert_eq!(off, 11);
    assert_eq!(
        response_body(&buf, off).unwrap(),
        &[0xD5, 0x03, 0x32, 0x01, 0x06, 0x07]
    );
}

#[test]
fn prefix_after_junk_and_ack() {
    let buf = [0x00, 0x7F, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xD5, 0x4B, 0x00];
    assert_eq!(find_response_prefix(&buf, [0xD5, 0x4B]), Some(8));
    assert_eq!(find_response_prefix(&buf, [0xD5, 0x41]), None);
}

proptest! {
    #[test]
    fn frame_roundtrip(tfi in any::<u8>(), data in prop::collection::vec(any::<u8>(), 0..=253)) {
        let frame = Frame::build(tfi, &data).unwrap();
        let bytes = frame.to_bytes();
        let parsed = Frame::parse(&bytes).unwrap();
        prop_assert_eq!(parsed.tfi(), tfi);
        prop_assert_eq!(parsed.data(), &data[..]);

        let len = bytes[3];
        prop_assert_eq!(len as usize, 1 + data.len() + 1);
        prop_assert_eq!(len.wrapping_add(bytes[4]), 0);
        let sum = bytes[5..5 + 1 + data.len()]
            .iter()
            .fold(0u8, |acc, b| acc.wrapping_add(*b));
        prop_assert_eq!(sum.wrapping_add(bytes[bytes.len() - 2]), 0);
    }
}
