#[path = "../common/mod.rs"]
mod common;

use libpn532::tag::ndef::{self, NdefContent, StopReason};
use libpn532::test_support::exchange_reply;

#[test]
fn read_hello_through_device() {
    let (mock, mut dev) = common::helpers::mock_device();
    common::helpers::push_pages(&mock, &common::fixtures::hello_pages(), 4);

    let read = ndef::read_blocks(&mut dev, 4, 0x81).unwrap();
    assert!(read.terminator_found());
    assert_eq!(read.pages_read, 4);
    match NdefContent::from_read(&read) {
        NdefContent::Text(rec) => {
            assert_eq!(rec.language, "en");
            assert_eq!(rec.text, "Hello");
        }
        other => panic!("expected text record, got: {:?}", other),
    }
}

#[test]
fn timeout_mid_read_keeps_partial_data() {
    let (mock, mut dev) = common::helpers::mock_device();
    common::helpers::push_pages(&mock, &common::fixtures::hello_pages(), 2);

    let read = ndef::read_blocks(&mut dev, 4, 0x81).unwrap();
    assert_eq!(read.stop, StopReason::ReadFailed { page: 6, status: None });
    assert_eq!(read.data.len(), 8);
    assert!(read.is_incomplete());
}

#[test]
fn write_then_frames_on_the_wire() {
    let (mock, mut dev) = common::helpers::mock_device();
    for _ in 0..4 {
        mock.push_response(exchange_reply(0x00, &[]));
    }
    let pages = ndef::write_text(&mut dev, "en", "Hello").unwrap();
    assert_eq!(pages, 4);

    let hello = common::fixtures::hello_pages();
    let first = [0x40, 0x01, 0xA2, 0x04, hello[0], hello[1], hello[2], hello[3]];
    assert!(mock
        .sent()
        .iter()
        .any(|w| w.windows(first.len()).any(|x| x == first)));
}

#[test]
fn encode_matches_fixture() {
    assert_eq!(
        ndef::encode_text_message("en", "Hello").unwrap(),
        common::fixtures::hello_pages()
    );
}

#[test]
fn message_ending_on_page_boundary_needs_no_extra_read() {
    let (mock, mut dev) = common::helpers::mock_device();
    common::helpers::push_pages(&mock, &[0x03, 0x06, 1, 2, 3, 4, 5, 6], 2);
    let sent_before = mock.sent().len();

    let read = ndef::read_blocks(&mut dev, 4, 0x81).unwrap();
    assert_eq!(read.stop, StopReason::DeclaredLength);
    assert_eq!(read.pages_read, 2);
    assert_eq!(read.used_bytes(), 8);
    assert_eq!(mock.pending_responses(), 0);
    // two READ frames, each followed by the ACK echo
    assert_eq!(mock.sent().len() - sent_before, 4);
}
