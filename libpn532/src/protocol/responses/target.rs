// libpn532/src/protocol/responses/target.rs

use crate::protocol::parser::{be_u16_at, byte_at, uid_at};
use crate::types::{Atqa, Uid};
use crate::Result;

/// One ISO14443-A target as reported by InListPassiveTarget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInfo {
    pub target: u8,
    pub atqa: Atqa,
    pub sak: u8,
    pub uid: Uid,
}

/// Decode InListPassiveTarget payload:
/// NbTg [Tg SENS_RES(2) SEL_RES NFCIDLength NFCID1...]
///
/// Only the first target is decoded; the command is always issued with
/// MaxTg = 1.
pub fn decode_in_list_passive_target(payload: &[u8]) -> Result<Option<TargetInfo>> {
    let count = byte_at(payload, 0)?;
    if count == 0 {
        return Ok(None);
    }

    Ok(Some(TargetInfo {
        target: byte_at(payload, 1)?,
        atqa: Atqa::new(be_u16_at(payload, 2)?),
        sak: byte_at(payload, 4)?,
        uid: uid_at(payload, 5)?,
    }))
}
