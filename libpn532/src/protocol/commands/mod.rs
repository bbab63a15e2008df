// libpn532/src/protocol/commands/mod.rs

pub mod tag;

pub use tag::TagCommand;

use crate::constants::*;

/// High-level PN532 command enum. `encode` produces the frame DATA (the
/// part after TFI); tag-level sub-commands live in [`TagCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Normal mode, virtual-card timeout 0x17 (x50 ms), IRQ enabled.
    SamConfiguration,
    GetFirmwareVersion,
    GetGeneralStatus,
    InListPassiveTarget {
        max_targets: u8,
        brty: u8,
    },
    InDataExchange {
        target: u8,
        command: TagCommand,
    },
}

impl Command {
    /// Detect a single ISO14443-A target at 106 kbps.
    pub fn detect_iso14443a() -> Self {
        Self::InListPassiveTarget {
            max_targets: 1,
            brty: PN532_BRTY_ISO14443A,
        }
    }

    /// Wrap a tag command for logical target 1.
    pub fn exchange(command: TagCommand) -> Self {
        Self::InDataExchange { target: 1, command }
    }

    /// PN532 command code
    pub fn command_code(&self) -> u8 {
        match self {
            Self::SamConfiguration => PN532_CMD_SAM_CONFIGURATION,
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::GetGeneralStatus => PN532_CMD_GET_GENERAL_STATUS,
            Self::InListPassiveTarget { .. } => PN532_CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => PN532_CMD_IN_DATA_EXCHANGE,
        }
    }

    /// The two bytes a matching device reply starts with: D5, code + 1.
    pub fn response_prefix(&self) -> [u8; 2] {
        [PN532_TFI_DEVICE, self.command_code().wrapping_add(1)]
    }

    /// Short name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SamConfiguration => "SAM Config",
            Self::GetFirmwareVersion => "Firmware Version",
            Self::GetGeneralStatus => "General Status",
            Self::InListPassiveTarget { .. } => "Detect Tag",
            Self::InDataExchange { command, .. } => command.label(),
        }
    }

    /// Encode into frame DATA (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![self.command_code()];
        match self {
            Self::SamConfiguration => buf.extend_from_slice(&[0x01, 0x17, 0x01]),
            Self::GetFirmwareVersion | Self::GetGeneralStatus => {}
            Self::InListPassiveTarget { max_targets, brty } => {
                buf.push(*max_targets);
                buf.push(*brty);
            }
            Self::InDataExchange { target, command } => {
                buf.push(*target);
                buf.extend_from_slice(&command.encode());
            }
        }
        buf
    }
}
