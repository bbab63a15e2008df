//! Hex rendering for log lines and UID display.

use std::fmt::Write;

fn join_hex(bytes: &[u8], sep: char, upper: bool) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(sep);
        }
        // write! never fails writing to a String
        let _ = if upper {
            write!(&mut s, "{:02X}", b)
        } else {
            write!(&mut s, "{:02x}", b)
        };
    }
    s
}

/// Lowercase hex with a single space between bytes, as used in frame logs.
///
/// Example: `&[0xd4, 0x14]` -> `"d4 14"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, ' ', false)
}

/// Uppercase, colon-separated hex, the usual way tag UIDs are displayed.
///
/// Example: `&[0x04, 0xa1]` -> `"04:A1"`
pub fn bytes_to_hex_colon(bytes: &[u8]) -> String {
    join_hex(bytes, ':', true)
}
