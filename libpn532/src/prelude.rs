// libpn532/src/prelude.rs

pub use crate::device::{AckEcho, Device, DeviceBuilder, DeviceConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::poll::{CancelToken, PollConfig, PollEvent, PollLoop, PollState};
pub use crate::protocol::{Command, Response, TagCommand};
pub use crate::tag::ndef::{NdefContent, TextRecord};
pub use crate::tag::{Protection, Tag, TagFamily, TagReading};
pub use crate::{Atqa, Error, FirmwareVersion, PageData, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_colon, bytes_to_hex_spaced, default_read_timeout, ms};
