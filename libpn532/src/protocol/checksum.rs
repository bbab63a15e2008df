// libpn532/src/protocol/checksum.rs

/// Length checksum: LCS = (0x100 - LEN) mod 256, so LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum over TFI‖DATA: DCS = (0x100 - (sum mod 256)) mod 256
pub fn dcs(body: &[u8]) -> u8 {
    let sum = body.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// Check that `body` followed by `checksum` sums to zero.
pub fn dcs_ok(body: &[u8], checksum: u8) -> bool {
    body.iter()
        .fold(checksum, |acc, &b| acc.wrapping_add(b))
        == 0
}
