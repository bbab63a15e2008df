// libpn532/src/tag/amiibo.rs
//! Amiibo (NTAG215) password authentication and character id lookup.

use crate::constants::{AMIIBO_CHAR_HI_PAGE, AMIIBO_CHAR_LO_PAGE, AMIIBO_PWD_MASK};
use crate::tag::TagLink;
use crate::types::Uid;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// PWD_AUTH password derived from a 7-byte UID. Recomputed per session,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmiiboCredential {
    password: [u8; 4],
}

impl AmiiboCredential {
    pub fn from_uid(uid: &Uid) -> Result<Self> {
        Ok(Self {
            password: derive_password(uid.as_bytes())?,
        })
    }

    pub fn password(&self) -> [u8; 4] {
        self.password
    }
}

/// `p[i] = mask[i] ^ uid[i + 1] ^ uid[i + 2]` with mask `AA 55 AA 55`.
pub fn derive_password(uid: &[u8]) -> Result<[u8; 4]> {
    if uid.len() != 7 {
        return Err(Error::InvalidLength {
            expected: 7,
            actual: uid.len(),
        });
    }
    let mut pwd = [0u8; 4];
    for (i, p) in pwd.iter_mut().enumerate() {
        *p = AMIIBO_PWD_MASK[i] ^ uid[i + 1] ^ uid[i + 2];
    }
    Ok(pwd)
}

/// Run PWD_AUTH. The tag's status byte must be zero.
pub fn authenticate<L: TagLink + ?Sized>(link: &mut L, credential: &AmiiboCredential) -> Result<()> {
    log::debug!(
        "Amiibo Auth password: {}",
        bytes_to_hex_spaced(&credential.password)
    );
    let pack = link.pwd_auth(credential.password)?;
    log::info!("Amiibo authenticated (PACK: {})", bytes_to_hex_spaced(&pack));
    Ok(())
}

/// Character id and variation stored on pages 0x15/0x16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterId {
    pub char_id: u16,
    pub variation: u8,
}

impl CharacterId {
    /// 3-byte catalog key: character id followed by variation.
    pub fn key(&self) -> u32 {
        ((self.char_id as u32) << 8) | self.variation as u32
    }

    pub fn from_key(key: u32) -> Self {
        Self {
            char_id: ((key >> 8) & 0xFFFF) as u16,
            variation: (key & 0xFF) as u8,
        }
    }

    /// Name used when the lookup store has no entry.
    pub fn placeholder_name(&self) -> String {
        format!(
            "Unknown Character (ID: 0x{:04X}, Variation: 0x{:02X})",
            self.char_id, self.variation
        )
    }
}

/// Read the two metadata pages after a successful authentication.
pub fn read_character_id<L: TagLink + ?Sized>(link: &mut L) -> Result<CharacterId> {
    let hi_page = link.read_page(AMIIBO_CHAR_HI_PAGE)?;
    let lo_page = link.read_page(AMIIBO_CHAR_LO_PAGE)?;
    let hi = hi_page.as_bytes();
    let lo = lo_page.as_bytes();

    let id = CharacterId {
        char_id: u16::from_be_bytes([hi[0], lo[0]]),
        variation: lo[1],
    };
    log::debug!(
        "Character ID: 0x{:04X}, Variation: 0x{:02X}",
        id.char_id,
        id.variation
    );
    Ok(id)
}

/// Character-name store queried after authentication.
pub trait CharacterLookup: Send {
    fn lookup(&self, char_id: u16, variation: u8) -> Option<String>;
}

/// Resolve a name, falling back to the placeholder. Never fails.
pub fn resolve_identity(lookup: Option<&dyn CharacterLookup>, id: CharacterId) -> String {
    lookup
        .and_then(|l| l.lookup(id.char_id, id.variation))
        .unwrap_or_else(|| id.placeholder_name())
}
