#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libpn532::poll::{PollConfig, PollEvent, PollLoop, PollState};
use libpn532::tag::Protection;
use libpn532::test_support::target_reply;

fn fast_config() -> PollConfig {
    PollConfig {
        interval: Duration::from_millis(1),
        probe_variant: false,
        ..PollConfig::default()
    }
}

#[test]
fn empty_field_is_retried_until_a_tag_appears() {
    let (mock, dev) = common::helpers::mock_device();
    let uid = common::fixtures::sample_uid_bytes();
    mock.push_response(target_reply(None));
    mock.push_timeout();
    mock.push_response(target_reply(Some((0x0044, 0x00, &uid))));
    common::helpers::push_pages(&mock, &common::fixtures::hello_pages(), 4);

    let mut lp = PollLoop::new(dev, fast_config());
    let mut events: Vec<PollEvent> = Vec::new();
    let reading = lp.run(&mut events).unwrap().expect("tag read");

    assert_eq!(reading.protection, Protection::Unprotected);
    assert_eq!(reading.text(), Some("Hello"));
    assert_eq!(lp.state(), PollState::Idle);

    let probes = events
        .iter()
        .filter(|e| matches!(e, PollEvent::State(PollState::Probing)))
        .count();
    assert_eq!(probes, 3);
    assert!(matches!(events.last(), Some(PollEvent::State(PollState::Idle))));
}
