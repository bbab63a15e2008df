// libpn532/src/tag/mod.rs

use crate::device::{Device, Initialized};
use crate::protocol::responses::TargetInfo;
use crate::types::{Atqa, PageData, Uid};
use crate::{Error, Result};

pub mod amiibo;
pub mod catalog;
pub mod classify;
pub mod ndef;

mod reading;
pub use reading::{CharacterInfo, MemoryUsage, Protection, TagReading};

pub use classify::{TagFamily, classify};

/// Page-level tag operations. `Device<Initialized>` is the real
/// implementation; tests drive the NDEF and Amiibo logic through fakes.
pub trait TagLink {
    fn read_page(&mut self, page: u8) -> Result<PageData>;

    fn write_page(&mut self, page: u8, data: [u8; 4]) -> Result<()>;

    /// PWD_AUTH; a rejected password is `Error::AuthenticationFailed`.
    fn pwd_auth(&mut self, password: [u8; 4]) -> Result<Vec<u8>>;

    /// Re-list the target, e.g. after the tag halted on a NAK.
    fn reselect(&mut self) -> Result<TargetInfo>;
}

impl TagLink for Device<Initialized> {
    fn read_page(&mut self, page: u8) -> Result<PageData> {
        Device::read_page(self, page)
    }

    fn write_page(&mut self, page: u8, data: [u8; 4]) -> Result<()> {
        Device::write_page(self, page, data)
    }

    fn pwd_auth(&mut self, password: [u8; 4]) -> Result<Vec<u8>> {
        Device::pwd_auth(self, password)
    }

    fn reselect(&mut self) -> Result<TargetInfo> {
        self.detect()
    }
}

/// One detected tag: raw ISO14443-A fields plus the derived family.
/// Lives for one detection cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    atqa: Atqa,
    sak: u8,
    uid: Uid,
    family: TagFamily,
}

impl Tag {
    pub fn new(atqa: Atqa, sak: u8, uid: Uid) -> Self {
        let family = classify(atqa, sak, uid.len());
        Self {
            atqa,
            sak,
            uid,
            family,
        }
    }

    pub fn atqa(&self) -> Atqa {
        self.atqa
    }

    pub fn sak(&self) -> u8 {
        self.sak
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn family(&self) -> TagFamily {
        self.family
    }

    /// Read the capability container and refine a generic NTAG into its
    /// density variant. Returns the announced data area size in bytes.
    ///
    /// A failed CC read leaves the family untouched. A tag that rejected
    /// the read has halted, so it is re-selected before returning.
    pub fn probe_variant<L: TagLink + ?Sized>(&mut self, link: &mut L) -> Option<usize> {
        if !self.family.is_type2() {
            return None;
        }
        match link.read_page(crate::constants::TAG_CC_PAGE) {
            Ok(cc) => {
                let size = cc.as_bytes()[2];
                if self.family == TagFamily::NtagGeneric {
                    if let Some(refined) = classify::family_from_cc(size) {
                        log::debug!("CC size {:#04x}: {} -> {}", size, self.family, refined);
                        self.family = refined;
                    }
                }
                Some(classify::memory_size_from_cc(size))
            }
            Err(Error::TagStatus { status }) => {
                log::debug!("CC probe rejected (status {:#04x}), re-selecting", status);
                if let Err(e) = link.reselect() {
                    log::debug!("Re-select after CC probe failed: {}", e);
                }
                None
            }
            Err(e) => {
                log::debug!("CC probe failed: {}", e);
                None
            }
        }
    }

    /// Mark a generic NTAG as protected after a rejected plain read.
    pub(crate) fn mark_protected(&mut self) {
        if self.family == TagFamily::NtagGeneric {
            self.family = TagFamily::NtagProtected;
        }
    }
}

impl From<TargetInfo> for Tag {
    fn from(target: TargetInfo) -> Self {
        Tag::new(target.atqa, target.sak, target.uid)
    }
}
