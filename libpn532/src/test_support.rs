//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build device replies the way a PN532 sends them (ACK
//! followed by a response frame) and centralize MockTransport setup.
#![allow(dead_code)]

use crate::constants::{PN532_ACK, PN532_TFI_DEVICE};
use crate::device::{Device, Initialized};
use crate::protocol::Frame;
use crate::transport::mock::MockTransport;
use crate::Result;

/// ACK sentinel followed by a device frame carrying `data` (starting at the
/// response code).
#[doc(hidden)]
pub fn ack_and_frame(data: &[u8]) -> Vec<u8> {
    let mut buf = PN532_ACK.to_vec();
    if let Ok(frame) = Frame::build(PN532_TFI_DEVICE, data) {
        buf.extend_from_slice(&frame.to_bytes());
    }
    buf
}

/// InDataExchange reply: `D5 41 <status> <data>`.
#[doc(hidden)]
pub fn exchange_reply(status: u8, data: &[u8]) -> Vec<u8> {
    let mut body = vec![0x41, status];
    body.extend_from_slice(data);
    ack_and_frame(&body)
}

/// Successful 16-byte READ reply.
#[doc(hidden)]
pub fn read_reply(data: &[u8; 16]) -> Vec<u8> {
    exchange_reply(0x00, data)
}

/// InListPassiveTarget reply for one target `(atqa, sak, uid)`, or an empty
/// field.
#[doc(hidden)]
pub fn target_reply(target: Option<(u16, u8, &[u8])>) -> Vec<u8> {
    match target {
        Some((atqa, sak, uid)) => {
            let mut body = vec![0x4B, 0x01, 0x01];
            body.extend_from_slice(&atqa.to_be_bytes());
            body.push(sak);
            body.push(uid.len() as u8);
            body.extend_from_slice(uid);
            ack_and_frame(&body)
        }
        None => ack_and_frame(&[0x4B, 0x00]),
    }
}

/// Replies to SAMConfiguration and GetFirmwareVersion (PN532 v1.6).
#[doc(hidden)]
pub fn init_replies() -> Vec<Vec<u8>> {
    vec![
        ack_and_frame(&[0x15]),
        ack_and_frame(&[0x03, 0x32, 0x01, 0x06, 0x07]),
    ]
}

/// Create and initialize a Device<Initialized> on a clone of `mock`. The
/// caller keeps `mock` to queue further replies and inspect writes.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &MockTransport) -> Result<Device<Initialized>> {
    for reply in init_replies() {
        mock.push_response(reply);
    }
    Device::new_with_transport(Box::new(mock.clone()))?.initialize()
}
