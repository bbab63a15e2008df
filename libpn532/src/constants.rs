// libpn532/src/constants.rs
//! Wire-level constants for the PN532 UART protocol.

/// Frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Preamble(3) + LEN + LCS + DCS + postamble
pub const PN532_FRAME_OVERHEAD: usize = 7;

/// Maximum length of TFI + DATA in a normal information frame
pub const PN532_MAX_BODY_LEN: usize = 254;

/// Direction bytes (TFI): host->PN532 (D4) and PN532->host (D5)
pub const PN532_TFI_HOST: u8 = 0xD4;
pub const PN532_TFI_DEVICE: u8 = 0xD5;

/// ACK / NACK sentinels. These are not information frames.
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];
pub const PN532_NACK: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// HSU wakeup: 0x55 followed by 15 idle bytes, sent ahead of every frame.
pub const PN532_WAKEUP: [u8; 16] = [
    0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// UART line settings (8-N-1 is implied)
pub const PN532_BAUD_RATE: u32 = 115_200;

/// PN532 command codes. The device answers with `code + 1`.
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_GET_GENERAL_STATUS: u8 = 0x04;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// 106 kbps ISO14443-A baud/modulation type for InListPassiveTarget
pub const PN532_BRTY_ISO14443A: u8 = 0x00;

/// NFC Forum Type-2 (NTAG / Ultralight) tag commands carried by InDataExchange
pub const TAG_CMD_READ: u8 = 0x30;
pub const TAG_CMD_WRITE: u8 = 0xA2;
pub const TAG_CMD_PWD_AUTH: u8 = 0x1B;

/// Type-2 memory layout
pub const TAG_PAGE_SIZE: usize = 4;
pub const TAG_CC_PAGE: u8 = 0x03;
pub const TAG_FIRST_USER_PAGE: u8 = 0x04;

/// NDEF TLV markers
pub const TLV_NULL: u8 = 0x00;
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
pub const TLV_TERMINATOR: u8 = 0xFE;

/// Amiibo password derivation mask and metadata pages
pub const AMIIBO_PWD_MASK: [u8; 4] = [0xAA, 0x55, 0xAA, 0x55];
pub const AMIIBO_CHAR_HI_PAGE: u8 = 0x15;
pub const AMIIBO_CHAR_LO_PAGE: u8 = 0x16;
