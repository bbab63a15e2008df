// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for PN532 NFC front-ends over UART: frame codec, command
//! channel, Type-2 tag classification, NDEF text reading and Amiibo
//! authentication, plus a cancellable poll loop.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod poll;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Error, Result and the newtypes are usable straight from the crate root.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
