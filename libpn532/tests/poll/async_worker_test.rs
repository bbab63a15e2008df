#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libpn532::poll::{LinkStatus, PollConfig, PollEvent, PollLoop, PollState};
use libpn532::test_support::target_reply;

fn fast_config() -> PollConfig {
    PollConfig {
        interval: Duration::from_millis(2),
        probe_variant: false,
        ..PollConfig::default()
    }
}

#[tokio::test]
async fn worker_reports_reading_and_returns_device() {
    let (mock, dev) = common::helpers::mock_device();
    let uid = common::fixtures::sample_uid_bytes();
    mock.push_response(target_reply(Some((0x0044, 0x00, &uid))));
    common::helpers::push_pages(&mock, &common::fixtures::hello_pages(), 4);

    let mut handle = PollLoop::new(dev, fast_config()).spawn();

    let mut events = Vec::new();
    while let Some(ev) = handle.recv().await {
        events.push(ev);
    }
    assert!(matches!(
        events.first(),
        Some(PollEvent::Status(LinkStatus::Connected { .. }))
    ));
    let reading = events
        .iter()
        .find_map(|e| match e {
            PollEvent::Reading(r) => Some(r.clone()),
            _ => None,
        })
        .expect("reading event");
    assert_eq!(reading.text(), Some("Hello"));

    let outcome = handle.join().await.unwrap();
    assert_eq!(outcome.result.unwrap(), Some(reading));
    assert!(!mock.is_closed());
}

#[tokio::test]
async fn disconnect_cancels_and_closes_link() {
    // 応答なし: 毎サイクル ReadTimeout で再試行し続ける
    let (mock, dev) = common::helpers::mock_device();
    let mut handle = PollLoop::new(dev, fast_config()).spawn();

    loop {
        match handle.recv().await {
            Some(PollEvent::State(PollState::Idle)) => break,
            Some(_) => continue,
            None => panic!("worker stopped before cancel"),
        }
    }

    let token = handle.cancel_token();
    handle.disconnect().await.unwrap();
    assert!(token.is_cancelled());
    assert!(mock.is_closed());
}
