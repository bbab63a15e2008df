// libpn532/src/protocol/responses/mod.rs

pub mod exchange;
pub mod firmware;
pub mod target;

pub use exchange::decode_data_exchange;
pub use firmware::{decode_firmware_version, decode_general_status};
pub use target::{TargetInfo, decode_in_list_passive_target};

use crate::constants::*;
use crate::protocol::parser;

/// PN532 GetGeneralStatus summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralStatus {
    pub last_error: u8,
    pub field_present: bool,
    pub targets: u8,
}

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    SamConfiguration,
    FirmwareVersion(crate::types::FirmwareVersion),
    GeneralStatus(GeneralStatus),
    /// `None` when no target answered.
    InListPassiveTarget(Option<TargetInfo>),
    /// Status byte (0 = success) and whatever the tag returned.
    InDataExchange { status: u8, data: Vec<u8> },
}

impl Response {
    /// Decode a response body (starting at `D5 <code>`) for the given
    /// command code.
    pub fn decode(command_code: u8, body: &[u8]) -> crate::Result<Self> {
        let expected = [PN532_TFI_DEVICE, command_code.wrapping_add(1)];
        parser::expect_prefix(body, expected)?;
        let payload = &body[2..];

        match command_code {
            PN532_CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration),
            PN532_CMD_GET_FIRMWARE_VERSION => {
                Ok(Self::FirmwareVersion(decode_firmware_version(payload)?))
            }
            PN532_CMD_GET_GENERAL_STATUS => {
                Ok(Self::GeneralStatus(decode_general_status(payload)?))
            }
            PN532_CMD_IN_LIST_PASSIVE_TARGET => Ok(Self::InListPassiveTarget(
                decode_in_list_passive_target(payload)?,
            )),
            PN532_CMD_IN_DATA_EXCHANGE => {
                let (status, data) = decode_data_exchange(payload)?;
                Ok(Self::InDataExchange { status, data })
            }
            other => Err(crate::Error::FrameFormat(format!(
                "no decoder for command {other:#04x}"
            ))),
        }
    }
}
