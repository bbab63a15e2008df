use libpn532::protocol::checksum::{dcs, dcs_ok, lcs};

#[test]
fn sam_config_checksums() {
    // D4 14 01: LEN = 4 (TFI + 2 data bytes + 1)
    assert_eq!(lcs(0x04), 0xFC);
    assert_eq!(dcs(&[0xD4, 0x14, 0x01]), 0x17);
    assert!(dcs_ok(&[0xD4, 0x14, 0x01], 0x17));
}

#[test]
fn lcs_wraps() {
    assert_eq!(lcs(0x00), 0x00);
    assert_eq!(lcs(0x01), 0xFF);
    assert_eq!(lcs(0xFF), 0x01);
}

#[test]
fn dcs_of_sum_multiple_of_256_is_zero() {
    assert_eq!(dcs(&[0x80, 0x80]), 0x00);
    assert!(!dcs_ok(&[0x80, 0x80], 0x01));
}
