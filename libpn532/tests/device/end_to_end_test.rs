#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::PN532_ACK;
use libpn532::poll::{PollConfig, PollEvent, PollLoop, PollState};
use libpn532::protocol::Frame;
use libpn532::tag::{Protection, TagFamily};

#[test]
fn ack_then_detect_then_unprotected_text() {
    let (mock, device) = common::helpers::mock_device();

    // ACK and the detect response arrive in separate reads
    mock.push_response(PN532_ACK.to_vec());
    let mut detect = vec![0x4B, 0x01, 0x01, 0x00, 0x44, 0x00, 0x07];
    detect.extend_from_slice(&common::fixtures::sample_uid_bytes());
    mock.push_response(Frame::build(0xD5, &detect).unwrap().to_bytes());

    // Protection check on page 4 answers with status 0, then pages 5..7
    common::helpers::push_pages(&mock, &common::fixtures::hello_pages(), 4);

    let config = PollConfig {
        probe_variant: false,
        ..PollConfig::default()
    };
    let mut poll = PollLoop::new(device, config);
    let mut events = Vec::new();
    let reading = poll.run(&mut events).unwrap().unwrap();

    assert_eq!(reading.family, TagFamily::NtagGeneric);
    assert_eq!(reading.protection, Protection::Unprotected);
    assert_eq!(reading.text(), Some("Hello"));
    assert_eq!(reading.language(), Some("en"));
    assert_eq!(reading.uid_hex(), "04:01:02:03:04:05:06");

    let states: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            PollEvent::State(s) => Some(*s),
            _ => None,
        })
        .collect();
    assert_eq!(
        states,
        vec![
            PollState::Probing,
            PollState::Detected,
            PollState::Classifying,
            PollState::Reading,
            PollState::Reporting,
            PollState::Idle,
        ]
    );
    assert_eq!(mock.pending_responses(), 0);
}
