// libpn532/src/tag/classify.rs

use derive_more::Display;

use crate::types::Atqa;

/// Contactless tag family derived from ATQA/SAK/UID length, optionally
/// refined by a capability-container probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TagFamily {
    #[display(fmt = "MIFARE Classic 1K")]
    MifareClassic1K,
    #[display(fmt = "MIFARE Classic 4K")]
    MifareClassic4K,
    #[display(fmt = "MIFARE Ultralight")]
    MifareUltralight,
    #[display(fmt = "NTAG (generic)")]
    NtagGeneric,
    #[display(fmt = "NTAG213")]
    Ntag213,
    #[display(fmt = "NTAG215")]
    Ntag215,
    #[display(fmt = "NTAG216")]
    Ntag216,
    #[display(fmt = "NTAG I2C")]
    NtagI2c,
    #[display(fmt = "MIFARE Plus 2K")]
    MifarePlus2K,
    #[display(fmt = "MIFARE Plus 4K")]
    MifarePlus4K,
    #[display(fmt = "MIFARE DESFire")]
    MifareDesfire,
    #[display(fmt = "MIFARE Mini")]
    MifareMini,
    #[display(fmt = "NTAG (protected)")]
    NtagProtected,
    #[display(
        fmt = "Unknown (ATQA: 0x{:04X}, SAK: 0x{:02X}, UID length: {})",
        atqa,
        sak,
        uid_len
    )]
    Unknown { atqa: u16, sak: u8, uid_len: usize },
}

impl TagFamily {
    /// Type-2 tags addressed with 4-byte page commands.
    pub fn is_type2(&self) -> bool {
        matches!(
            self,
            Self::MifareUltralight
                | Self::NtagGeneric
                | Self::Ntag213
                | Self::Ntag215
                | Self::Ntag216
                | Self::NtagI2c
                | Self::NtagProtected
        )
    }

    /// Families that may be an Amiibo once a protected read was seen.
    /// Only NTAG215 is certain; the generic entries cover tags whose
    /// density could not be probed.
    pub fn may_be_amiibo(&self) -> bool {
        matches!(self, Self::Ntag215 | Self::NtagGeneric | Self::NtagProtected)
    }
}

// (ATQA, SAK, UID length) -> family. Exact match only.
const CLASSIFY_TABLE: &[(u16, u8, usize, TagFamily)] = &[
    (0x0004, 0x08, 4, TagFamily::MifareClassic1K),
    (0x0002, 0x18, 4, TagFamily::MifareClassic4K),
    (0x0044, 0x00, 7, TagFamily::NtagGeneric),
    (0x0004, 0x09, 4, TagFamily::MifareMini),
    (0x0044, 0x08, 7, TagFamily::MifarePlus2K),
    (0x0042, 0x18, 7, TagFamily::MifarePlus4K),
    (0x0044, 0x18, 7, TagFamily::MifarePlus4K),
    (0x0344, 0x20, 7, TagFamily::MifareDesfire),
];

/// Map raw ISO14443-A fields to a family. Unmatched triples come back as
/// `Unknown` carrying the inputs.
pub fn classify(atqa: Atqa, sak: u8, uid_len: usize) -> TagFamily {
    let raw = atqa.as_u16();
    CLASSIFY_TABLE
        .iter()
        .find(|(a, s, l, _)| *a == raw && *s == sak && *l == uid_len)
        .map(|(_, _, _, family)| *family)
        .unwrap_or(TagFamily::Unknown {
            atqa: raw,
            sak,
            uid_len,
        })
}

/// Refine a generic NTAG from the capability container size byte (page 3,
/// byte 2).
pub fn family_from_cc(cc_size: u8) -> Option<TagFamily> {
    match cc_size {
        0x06 => Some(TagFamily::MifareUltralight),
        0x12 => Some(TagFamily::Ntag213),
        0x3E => Some(TagFamily::Ntag215),
        0x6D => Some(TagFamily::Ntag216),
        0xEA => Some(TagFamily::NtagI2c),
        _ => None,
    }
}

/// Data area size in bytes announced by the capability container.
pub fn memory_size_from_cc(cc_size: u8) -> usize {
    cc_size as usize * 8
}
