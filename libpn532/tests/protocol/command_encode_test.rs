use libpn532::protocol::codec::encode_command_frame;
use libpn532::protocol::{Command, TagCommand};

#[test]
fn detect_frame_bytes() {
    let frame = encode_command_frame(&Command::detect_iso14443a()).unwrap();
    assert_eq!(
        frame,
        vec![0x00, 0x00, 0xFF, 0x05, 0xFB, 0xD4, 0x4A, 0x01, 0x00, 0xE1, 0x00]
    );
}

#[test]
fn pwd_auth_under_data_exchange() {
    let cmd = Command::exchange(TagCommand::PwdAuth {
        password: [0xA9, 0x54, 0xAD, 0x54],
    });
    assert_eq!(cmd.encode(), vec![0x40, 0x01, 0x1B, 0xA9, 0x54, 0xAD, 0x54]);
    assert_eq!(cmd.response_prefix(), [0xD5, 0x41]);
    assert_eq!(cmd.label(), "Amiibo Auth");
}

#[test]
fn write_page_encoding() {
    let cmd = Command::exchange(TagCommand::Write {
        page: 0x04,
        data: [0x03, 0x0C, 0xD1, 0x01],
    });
    assert_eq!(
        cmd.encode(),
        vec![0x40, 0x01, 0xA2, 0x04, 0x03, 0x0C, 0xD1, 0x01]
    );
    assert_eq!(cmd.label(), "Write Page");
}
