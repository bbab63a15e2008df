// libpn532/src/protocol/commands/tag.rs

use crate::constants::{TAG_CMD_PWD_AUTH, TAG_CMD_READ, TAG_CMD_WRITE};

/// NFC Forum Type-2 commands relayed to the tag through InDataExchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCommand {
    /// READ: returns 16 bytes (four pages) starting at `page`.
    Read { page: u8 },
    /// WRITE: one 4-byte page.
    Write { page: u8, data: [u8; 4] },
    /// PWD_AUTH: 4-byte password, tag answers with a 2-byte PACK.
    PwdAuth { password: [u8; 4] },
}

impl TagCommand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Read { .. } => "Read Page",
            Self::Write { .. } => "Write Page",
            Self::PwdAuth { .. } => "Amiibo Auth",
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Read { page } => vec![TAG_CMD_READ, *page],
            Self::Write { page, data } => {
                let mut buf = Vec::with_capacity(6);
                buf.push(TAG_CMD_WRITE);
                buf.push(*page);
                buf.extend_from_slice(data);
                buf
            }
            Self::PwdAuth { password } => {
                let mut buf = Vec::with_capacity(5);
                buf.push(TAG_CMD_PWD_AUTH);
                buf.extend_from_slice(password);
                buf
            }
        }
    }
}
