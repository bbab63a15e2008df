// libpn532/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// ISO14443-A UID - Newtype Pattern (4 or 7 バイト)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_colon(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 | 7 => Ok(Self(bytes.to_vec())),
            n => Err(Error::InvalidLength {
                expected: if n < 7 { 4 } else { 7 },
                actual: n,
            }),
        }
    }
}

/// ATQA / SENS_RES as reported by InListPassiveTarget (big-endian on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Atqa(u16);

impl Atqa {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn from_bytes(hi: u8, lo: u8) -> Self {
        Self(u16::from_be_bytes([hi, lo]))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn hi(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn lo(&self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

/// One 4-byte Type-2 page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageData([u8; 4]);

impl PageData {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for PageData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}

/// PN532 firmware identification returned by GetFirmwareVersion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PN5{:02x} firmware {}.{} (support {:#04x})",
            self.ic, self.version, self.revision, self.support
        )
    }
}
