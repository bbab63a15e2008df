// libpn532/src/protocol/responses/firmware.rs

use super::GeneralStatus;
use crate::protocol::parser::{byte_at, ensure_len};
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode GetFirmwareVersion payload: IC, Ver, Rev, Support
pub fn decode_firmware_version(payload: &[u8]) -> Result<FirmwareVersion> {
    ensure_len(payload, 4)?;
    Ok(FirmwareVersion {
        ic: payload[0],
        version: payload[1],
        revision: payload[2],
        support: payload[3],
    })
}

/// Decode GetGeneralStatus payload: Err, Field, NbTg, ...
pub fn decode_general_status(payload: &[u8]) -> Result<GeneralStatus> {
    Ok(GeneralStatus {
        last_error: byte_at(payload, 0)?,
        field_present: byte_at(payload, 1)? != 0,
        targets: byte_at(payload, 2)?,
    })
}
