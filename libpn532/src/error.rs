// libpn532/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("serial port {port} unavailable: {reason}")]
    PortUnavailable { port: String, reason: String },

    #[error("serial port {port} disappeared")]
    PortLost { port: String },

    #[error("link is closed")]
    LinkClosed,

    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("read timed out")]
    ReadTimeout,

    #[error("frame too large: max {max} bytes of TFI+DATA, got {actual}")]
    OversizeFrame { max: usize, actual: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("device answered with NACK")]
    Nack,

    #[error("response prefix {expected:02x?} not found in {} received bytes", .received.len())]
    PrefixNotFound { expected: [u8; 2], received: Vec<u8> },

    #[error("no target in field")]
    NoTarget,

    #[error("tag reported status {status:#04x}")]
    TagStatus { status: u8 },

    #[error("NDEF read stopped after {pages_read} pages without terminator")]
    IncompleteRead { pages_read: usize },

    #[error("authentication failed: status={status:#04x}")]
    AuthenticationFailed { status: u8 },

    #[error("operation cancelled")]
    Cancelled,

    #[error("poll worker failed: {0}")]
    Worker(String),
}

impl Error {
    /// True for failures that only mean "nothing answered this cycle". The
    /// poll loop keeps going on these; anything else halts it.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            Error::ReadTimeout | Error::PrefixNotFound { .. } | Error::NoTarget | Error::Nack
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
