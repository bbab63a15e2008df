// libpn532/src/transport/traits.rs

use crate::constants::PN532_WAKEUP;
use crate::Result;

/// Transport trait abstracts the UART link away from protocol/device logic.
///
/// Implementations own their OS handle exclusively and release it on
/// `close` or drop.
pub trait Transport: Send {
    /// Write raw bytes to the device as one ordered write.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read whatever the device has sent within `timeout_ms`, plus any
    /// trailing bytes that arrive during a short re-poll. Returns
    /// `Error::ReadTimeout` when nothing arrived.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Name of the underlying port, if the transport has one.
    fn port_name(&self) -> Option<String> {
        None
    }

    /// Release the handle. Later calls fail with `Error::LinkClosed`.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Write the HSU wakeup pattern immediately followed by `frame`.
    ///
    /// Every command goes through here: the host cannot observe whether the
    /// PN532 fell back into power-down, so the wakeup is never skipped.
    fn send_with_wakeup(&mut self, frame: &[u8]) -> Result<()> {
        let mut buf = Vec::with_capacity(PN532_WAKEUP.len() + frame.len());
        buf.extend_from_slice(&PN532_WAKEUP);
        buf.extend_from_slice(frame);
        self.send(&buf)
    }
}
