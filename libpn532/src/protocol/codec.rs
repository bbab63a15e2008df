// libpn532/src/protocol/codec.rs

use crate::constants::{PN532_ACK, PN532_NACK, PN532_POSTAMBLE, PN532_PREAMBLE};
use crate::protocol::checksum::{dcs, dcs_ok, lcs};
use crate::{Error, Result};

use super::Frame;
use super::commands::Command;

/// Encode a Command into a full host->PN532 wire frame.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let frame = Frame::build(crate::constants::PN532_TFI_HOST, &cmd.encode())?;
    Ok(frame.to_bytes())
}

/// True iff the buffer starts with the ACK sentinel.
pub fn is_ack(bytes: &[u8]) -> bool {
    bytes.starts_with(&PN532_ACK)
}

/// True iff the buffer starts with the NACK sentinel.
pub fn is_nack(bytes: &[u8]) -> bool {
    bytes.starts_with(&PN532_NACK)
}

/// Drop a leading ACK sentinel, if any.
pub fn strip_ack(bytes: &[u8]) -> (bool, &[u8]) {
    if is_ack(bytes) {
        (true, &bytes[PN532_ACK.len()..])
    } else {
        (false, bytes)
    }
}

/// Offset of the first occurrence of `prefix` in `bytes`.
pub fn find_response_prefix(bytes: &[u8], prefix: [u8; 2]) -> Option<usize> {
    bytes.windows(2).position(|w| w == prefix)
}

/// Extract the response body that starts at `offset` (the `D5 <code>`
/// position found by [`find_response_prefix`]).
///
/// When a frame header sits right in front of the prefix, its checksums are
/// verified and the body is cut at the DCS byte. Both LEN conventions are
/// accepted: LEN = |TFI‖DATA| as sent by PN532 firmware, and LEN =
/// |TFI‖DATA| + 1 as produced by [`Frame::build`]; a candidate only counts
/// when its DCS verifies and the postamble follows. Without a header (or
/// with a truncated frame) everything from the prefix onward is returned.
pub fn response_body(bytes: &[u8], offset: usize) -> Result<&[u8]> {
    let Some(start) = offset.checked_sub(5) else {
        return Ok(&bytes[offset..]);
    };
    if bytes[start..start + 3] != PN532_PREAMBLE {
        return Ok(&bytes[offset..]);
    }

    let len = bytes[start + 3];
    let lcs_expected = lcs(len);
    if bytes[start + 4] != lcs_expected {
        return Err(Error::ChecksumMismatch {
            expected: lcs_expected,
            actual: bytes[start + 4],
        });
    }

    let mut first_mismatch = None;
    for body_len in [len as usize, (len as usize).saturating_sub(1)] {
        if body_len < 2 {
            continue;
        }
        let dcs_at = offset + body_len;
        let (Some(&dcs_actual), Some(&postamble)) = (bytes.get(dcs_at), bytes.get(dcs_at + 1))
        else {
            continue;
        };
        let body = &bytes[offset..dcs_at];
        if dcs_ok(body, dcs_actual) && postamble == PN532_POSTAMBLE {
            return Ok(body);
        }
        first_mismatch.get_or_insert(Error::ChecksumMismatch {
            expected: dcs(body),
            actual: dcs_actual,
        });
    }

    match first_mismatch {
        Some(err) => Err(err),
        None => Ok(&bytes[offset..]),
    }
}
