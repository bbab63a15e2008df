// libpn532/src/protocol/frame.rs

use crate::constants::{PN532_FRAME_OVERHEAD, PN532_MAX_BODY_LEN, PN532_POSTAMBLE, PN532_PREAMBLE};
use crate::protocol::checksum::{dcs, dcs_ok, lcs};
use crate::{Error, Result};

/// PN532 normal information frame.
///
/// Format: [Preamble(3)] [LEN] [LCS] [TFI] [DATA(n)] [DCS] [Postamble]
///
/// `LEN` counts TFI‖DATA plus one, `LCS` makes `LEN + LCS == 0 (mod 256)`
/// and `DCS` makes `sum(TFI‖DATA) + DCS == 0 (mod 256)`. A frame is built
/// once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    tfi: u8,
    data: Vec<u8>,
}

impl Frame {
    /// Build a frame from a direction byte and command data.
    pub fn build(tfi: u8, data: &[u8]) -> Result<Self> {
        let body_len = 1 + data.len();
        if body_len > PN532_MAX_BODY_LEN {
            return Err(Error::OversizeFrame {
                max: PN532_MAX_BODY_LEN,
                actual: body_len,
            });
        }
        Ok(Self {
            tfi,
            data: data.to_vec(),
        })
    }

    pub fn tfi(&self) -> u8 {
        self.tfi
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// TFI‖DATA
    pub fn body(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(1 + self.data.len());
        body.push(self.tfi);
        body.extend_from_slice(&self.data);
        body
    }

    /// The LEN byte. `build` guarantees it fits.
    pub fn len_byte(&self) -> u8 {
        (1 + self.data.len() + 1) as u8
    }

    pub fn lcs(&self) -> u8 {
        lcs(self.len_byte())
    }

    pub fn dcs(&self) -> u8 {
        dcs(&self.body())
    }

    /// Serialize to wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let body = self.body();
        let mut out = Vec::with_capacity(PN532_FRAME_OVERHEAD + body.len());
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(self.len_byte());
        out.push(self.lcs());
        out.extend_from_slice(&body);
        out.push(dcs(&body));
        out.push(PN532_POSTAMBLE);
        out
    }

    /// Parse a complete frame produced by [`Frame::to_bytes`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PN532_FRAME_OVERHEAD + 1 {
            return Err(Error::InvalidLength {
                expected: PN532_FRAME_OVERHEAD + 1,
                actual: bytes.len(),
            });
        }

        if bytes[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = bytes[3];
        let lcs_expected = lcs(len);
        if bytes[4] != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: bytes[4],
            });
        }
        if len < 2 {
            return Err(Error::FrameFormat(format!("LEN {len:#04x} too small")));
        }

        let body_len = len as usize - 1;
        let required_len = PN532_FRAME_OVERHEAD + body_len;
        if bytes.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: bytes.len(),
            });
        }

        let body = &bytes[5..5 + body_len];
        let dcs_actual = bytes[5 + body_len];
        if !dcs_ok(body, dcs_actual) {
            return Err(Error::ChecksumMismatch {
                expected: dcs(body),
                actual: dcs_actual,
            });
        }

        if bytes[6 + body_len] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(Self {
            tfi: body[0],
            data: body[1..].to_vec(),
        })
    }
}
