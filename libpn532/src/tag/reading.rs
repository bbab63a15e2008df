// libpn532/src/tag/reading.rs

use std::fmt;

use crate::tag::classify::TagFamily;
use crate::tag::ndef::NdefContent;
use crate::types::Uid;

/// Protection / authentication state observed during the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Protection {
    Unprotected,
    /// Plain reads were rejected and no authentication was attempted.
    Protected,
    Authenticated,
    AuthFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemoryUsage {
    pub total: usize,
    pub used: usize,
}

/// Resolved Amiibo identity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterInfo {
    pub char_id: u16,
    pub variation: u8,
    pub name: String,
}

/// Final output of one successful poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagReading {
    pub family: TagFamily,
    pub uid: Uid,
    pub protection: Protection,
    pub memory: Option<MemoryUsage>,
    pub content: NdefContent,
    /// The NDEF read ended before the message did; `content` is partial.
    pub incomplete: bool,
    pub character: Option<CharacterInfo>,
}

impl TagReading {
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            NdefContent::Text(rec) => Some(&rec.text),
            _ => None,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match &self.content {
            NdefContent::Text(rec) => Some(&rec.language),
            _ => None,
        }
    }

    pub fn uid_hex(&self) -> String {
        self.uid.to_hex()
    }
}

impl fmt::Display for TagReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tag Type: {}", self.family)?;
        writeln!(f, "UID: {}", self.uid_hex())?;
        let protection = match self.protection {
            Protection::Unprotected => "Unprotected",
            Protection::Protected => "Protected",
            Protection::Authenticated => "Authenticated",
            Protection::AuthFailed => "Authentication failed",
        };
        writeln!(f, "Protection: {}", protection)?;
        if let Some(mem) = self.memory {
            writeln!(f, "Memory: {} / {} bytes used", mem.used, mem.total)?;
        }
        if let Some(ch) = &self.character {
            writeln!(f, "Character: {}", ch.name)?;
        }
        match &self.content {
            NdefContent::Text(rec) => write!(f, "Text ({}): {}", rec.language, rec.text)?,
            NdefContent::Raw(bytes) => {
                write!(f, "Raw: {}", crate::utils::bytes_to_hex_spaced(bytes))?
            }
            NdefContent::Empty => write!(f, "No NDEF data")?,
        }
        if self.incomplete {
            write!(f, " (incomplete)")?;
        }
        Ok(())
    }
}
