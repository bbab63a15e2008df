#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use std::time::Duration;

use libpn532::poll::{PollConfig, PollLoop};
use libpn532::Result;

// These tests need a PN532 on the port named by PN532_PORT. They are
// marked `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// PN532_PORT=/dev/ttyUSB0 cargo test -p libpn532 --test hardware --features serial -- --ignored
//

#[test]
#[ignore]
fn open_and_initialize_pn532() -> Result<()> {
    if let Some(device) = common::open_and_initialize_device()? {
        let fw = device.firmware().expect("firmware read during initialize");
        assert_eq!(fw.ic, 0x32);
    }
    Ok(())
}

#[test]
#[ignore]
fn read_one_tag() -> Result<()> {
    let Some(device) = common::open_and_initialize_device()? else {
        return Ok(());
    };
    let mut lp = PollLoop::new(
        device,
        PollConfig {
            interval: Duration::from_millis(200),
            ..PollConfig::default()
        },
    );
    let mut events = Vec::new();
    if let Some(reading) = lp.run(&mut events)? {
        println!("{}", reading);
    }
    Ok(())
}
