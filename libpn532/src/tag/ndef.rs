// libpn532/src/tag/ndef.rs
//! NDEF on Type-2 tags: page-wise TLV reassembly, TEXT record parsing and
//! TEXT message encoding.

use crate::constants::{TAG_FIRST_USER_PAGE, TAG_PAGE_SIZE, TLV_NDEF_MESSAGE, TLV_NULL, TLV_TERMINATOR};
use crate::tag::TagLink;
use crate::types::PageData;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

// Lock / memory control TLVs may precede the NDEF message TLV
const TLV_LOCK_CONTROL: u8 = 0x01;
const TLV_MEMORY_CONTROL: u8 = 0x02;

const RECORD_HEADER_TEXT: [u8; 2] = [0xD1, 0x01];
const RECORD_TYPE_TEXT: u8 = 0x54;

/// Location of the NDEF message value inside the accumulated bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MessageTlv {
    value_start: usize,
    value_len: usize,
}

impl MessageTlv {
    fn end(&self) -> usize {
        self.value_start + self.value_len
    }
}

/// Walk the leading TLVs until the NDEF message TLV header. `None` while
/// the header is not complete yet or when the area holds something else.
fn message_tlv(data: &[u8]) -> Option<MessageTlv> {
    let mut i = 0;
    loop {
        match *data.get(i)? {
            TLV_NULL => i += 1,
            t @ (TLV_LOCK_CONTROL | TLV_MEMORY_CONTROL | TLV_NDEF_MESSAGE) => {
                let (len, header) = match *data.get(i + 1)? {
                    0xFF => {
                        let hi = *data.get(i + 2)? as usize;
                        let lo = *data.get(i + 3)? as usize;
                        ((hi << 8) | lo, 4)
                    }
                    n => (n as usize, 2),
                };
                if t == TLV_NDEF_MESSAGE {
                    return Some(MessageTlv {
                        value_start: i + header,
                        value_len: len,
                    });
                }
                i += header + len;
            }
            _ => return None,
        }
    }
}

/// Why an NDEF read stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A terminator TLV (0xFE) was seen.
    Terminator,
    /// The declared message length was reached without a visible terminator.
    DeclaredLength,
    /// `max_page` was read without reaching the end of the message.
    MaxPage,
    /// A page read failed; accumulation stopped there.
    ReadFailed { page: u8, status: Option<u8> },
}

/// Grows 4 bytes per page until the terminator or the declared message
/// length shows up. Never shrinks.
#[derive(Debug, Clone, Default)]
pub struct NdefAccumulator {
    data: Vec<u8>,
    stop: Option<StopReason>,
}

impl NdefAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page. Returns true once accumulation is finished; further
    /// pages are ignored.
    pub fn push_page(&mut self, page: &[u8; TAG_PAGE_SIZE]) -> bool {
        if self.stop.is_some() {
            return true;
        }
        self.data.extend_from_slice(page);

        let tlv = message_tlv(&self.data);
        // 0xFE inside the message value is payload, not a terminator
        let scan_from = tlv.map_or(0, |t| t.end().min(self.data.len()));
        if self.data[scan_from..].contains(&TLV_TERMINATOR) {
            self.stop = Some(StopReason::Terminator);
        } else if tlv.is_some_and(|t| self.data.len() >= t.end()) {
            self.stop = Some(StopReason::DeclaredLength);
        }
        self.stop.is_some()
    }

    pub fn is_done(&self) -> bool {
        self.stop.is_some()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn finish(self, fallback: StopReason, pages_read: usize) -> NdefRead {
        NdefRead {
            stop: self.stop.unwrap_or(fallback),
            data: self.data,
            pages_read,
        }
    }
}

/// Result of [`read_blocks`]. Partial data is kept on every stop reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRead {
    pub data: Vec<u8>,
    pub stop: StopReason,
    pub pages_read: usize,
}

impl NdefRead {
    pub fn terminator_found(&self) -> bool {
        self.stop == StopReason::Terminator
    }

    /// True when the message end was never reached.
    pub fn is_incomplete(&self) -> bool {
        matches!(self.stop, StopReason::MaxPage | StopReason::ReadFailed { .. })
    }

    /// `Error::IncompleteRead` unless the read reached the message end.
    pub fn into_complete(self) -> Result<Self> {
        if self.is_incomplete() {
            Err(Error::IncompleteRead {
                pages_read: self.pages_read,
            })
        } else {
            Ok(self)
        }
    }

    /// The NDEF message value, clipped to what was actually read. `None`
    /// when no message TLV header was found.
    pub fn message(&self) -> Option<&[u8]> {
        let tlv = message_tlv(&self.data)?;
        let end = tlv.end().min(self.data.len());
        self.data.get(tlv.value_start..end)
    }

    /// Bytes taken by the TLV area, including the terminator when one was
    /// read.
    pub fn used_bytes(&self) -> usize {
        match message_tlv(&self.data) {
            Some(tlv) if self.terminator_found() => (tlv.end() + 1).min(self.data.len()),
            Some(tlv) => tlv.end().min(self.data.len()),
            None => self
                .data
                .iter()
                .position(|&b| b == TLV_TERMINATOR)
                .map_or(self.data.len(), |p| p + 1),
        }
    }
}

/// Read pages `start..=max_page`, one exchange per page, until the NDEF
/// message is complete.
///
/// A page rejected by the tag, or a benign link failure, stops the loop
/// and is reported in [`StopReason::ReadFailed`]; other link errors
/// propagate.
pub fn read_blocks<L: TagLink + ?Sized>(link: &mut L, start: u8, max_page: u8) -> Result<NdefRead> {
    read_into(link, NdefAccumulator::new(), start, max_page, 0)
}

/// Same as [`read_blocks`] from the first user page, when that page was
/// already read (the protection check does so).
pub fn continue_blocks<L: TagLink + ?Sized>(
    link: &mut L,
    first: &PageData,
    max_page: u8,
) -> Result<NdefRead> {
    let mut acc = NdefAccumulator::new();
    if acc.push_page(first.as_bytes()) {
        return Ok(acc.finish(StopReason::MaxPage, 1));
    }
    read_into(link, acc, TAG_FIRST_USER_PAGE + 1, max_page, 1)
}

fn read_into<L: TagLink + ?Sized>(
    link: &mut L,
    mut acc: NdefAccumulator,
    start: u8,
    max_page: u8,
    mut pages_read: usize,
) -> Result<NdefRead> {
    for page in start..=max_page {
        match link.read_page(page) {
            Ok(data) => {
                pages_read += 1;
                log::trace!("page {:#04x}: {}", page, data.to_hex());
                if acc.push_page(data.as_bytes()) {
                    break;
                }
            }
            Err(Error::TagStatus { status }) => {
                log::warn!("Read page {:#04x} failed with status {:#04x}", page, status);
                return Ok(acc.finish(
                    StopReason::ReadFailed {
                        page,
                        status: Some(status),
                    },
                    pages_read,
                ));
            }
            Err(e) if e.is_benign() => {
                log::warn!("Read page {:#04x} failed: {}", page, e);
                return Ok(acc.finish(StopReason::ReadFailed { page, status: None }, pages_read));
            }
            Err(e) => return Err(e),
        }
    }

    let read = acc.finish(StopReason::MaxPage, pages_read);
    if read.stop == StopReason::MaxPage {
        log::warn!(
            "NDEF read reached page {:#04x} without terminator ({} bytes)",
            max_page,
            read.data.len()
        );
    }
    Ok(read)
}

/// A well-known TEXT record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextRecord {
    pub language: String,
    pub text: String,
}

/// Find a short well-known TEXT record (`D1 01 <len> 54 <status> ...`) and
/// decode it. Anything else, including non-UTF-8 text, yields `None`.
pub fn parse_text_record(raw: &[u8]) -> Option<TextRecord> {
    let start = raw
        .windows(4)
        .position(|w| w[..2] == RECORD_HEADER_TEXT && w[3] == RECORD_TYPE_TEXT)?;
    let payload_len = raw[start + 2] as usize;
    let payload = raw.get(start + 4..start + 4 + payload_len)?;

    let (&status, rest) = payload.split_first()?;
    let lang_len = (status & 0x3F) as usize;
    let language = std::str::from_utf8(rest.get(..lang_len)?).ok()?;
    let text = std::str::from_utf8(&rest[lang_len..]).ok()?;

    Some(TextRecord {
        language: language.to_string(),
        text: text.to_string(),
    })
}

/// What the NDEF area held.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NdefContent {
    Text(TextRecord),
    /// Not a TEXT record; surfaced verbatim.
    Raw(Vec<u8>),
    Empty,
}

impl NdefContent {
    pub fn from_read(read: &NdefRead) -> Self {
        let bytes = read.message().unwrap_or(&read.data);
        if bytes.is_empty() {
            return Self::Empty;
        }
        match parse_text_record(bytes) {
            Some(record) => Self::Text(record),
            None => Self::Raw(bytes.to_vec()),
        }
    }
}

/// Encode a single TEXT record NDEF message as TLV bytes, terminated and
/// zero-padded to whole pages.
pub fn encode_text_message(language: &str, text: &str) -> Result<Vec<u8>> {
    let lang = language.as_bytes();
    if lang.len() > 0x3F {
        return Err(Error::InvalidLength {
            expected: 0x3F,
            actual: lang.len(),
        });
    }
    let payload_len = 1 + lang.len() + text.len();
    let plen = u8::try_from(payload_len).map_err(|_| Error::InvalidLength {
        expected: u8::MAX as usize,
        actual: payload_len,
    })?;

    let mut record = Vec::with_capacity(4 + payload_len);
    record.extend_from_slice(&RECORD_HEADER_TEXT);
    record.push(plen);
    record.push(RECORD_TYPE_TEXT);
    record.push(lang.len() as u8);
    record.extend_from_slice(lang);
    record.extend_from_slice(text.as_bytes());

    let mut out = vec![TLV_NDEF_MESSAGE];
    if record.len() < 0xFF {
        out.push(record.len() as u8);
    } else {
        out.push(0xFF);
        out.extend_from_slice(&(record.len() as u16).to_be_bytes());
    }
    out.extend_from_slice(&record);
    out.push(TLV_TERMINATOR);
    while out.len() % TAG_PAGE_SIZE != 0 {
        out.push(0x00);
    }
    Ok(out)
}

/// Write a TEXT message starting at the first user page. Returns the number
/// of pages written.
pub fn write_text<L: TagLink + ?Sized>(link: &mut L, language: &str, text: &str) -> Result<usize> {
    let bytes = encode_text_message(language, text)?;
    log::debug!("Write NDEF: {}", bytes_to_hex_spaced(&bytes));

    let mut page = TAG_FIRST_USER_PAGE;
    for chunk in bytes.chunks_exact(TAG_PAGE_SIZE) {
        let mut data = [0u8; TAG_PAGE_SIZE];
        data.copy_from_slice(chunk);
        link.write_page(page, data)?;
        page = page.checked_add(1).ok_or(Error::InvalidLength {
            expected: u8::MAX as usize,
            actual: page as usize + 1,
        })?;
    }
    Ok(bytes.len() / TAG_PAGE_SIZE)
}
