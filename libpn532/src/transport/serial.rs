// libpn532/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::constants::PN532_BAUD_RATE;
use crate::transport::traits::Transport;
use crate::utils::{ms, timeout};
use crate::{Error, Result};

/// PN532 HSU (UART) link: 115200-8-N-1.
///
/// The port handle is owned exclusively; `close` or drop releases it.
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    name: String,
    write_timeout: Duration,
    repoll_delay: Duration,
}

impl SerialTransport {
    /// Open `name` with the default timeouts.
    pub fn open(name: &str) -> Result<Self> {
        Self::open_with(
            name,
            timeout::default_write_timeout(),
            ms(timeout::DEFAULT_REPOLL_DELAY_MS),
        )
    }

    /// Open `name` with explicit write timeout and re-poll delay. The read
    /// window is passed per `receive` call.
    pub fn open_with(name: &str, write_timeout: Duration, repoll_delay: Duration) -> Result<Self> {
        let port = serialport::new(name, PN532_BAUD_RATE)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(timeout::default_read_timeout())
            .open()
            .map_err(|e| Error::PortUnavailable {
                port: name.to_string(),
                reason: e.to_string(),
            })?;

        log::info!("Opened serial port: {}", name);
        Ok(Self {
            port: Some(port),
            name: name.to_string(),
            write_timeout,
            repoll_delay,
        })
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or(Error::LinkClosed)
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let write_timeout = self.write_timeout;
        let port = self.port_mut()?;
        port.set_timeout(write_timeout)?;
        port.write_all(data)?;
        port.flush()?;
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let repoll = self.repoll_delay;
        let port = self.port_mut()?;
        port.set_timeout(ms(timeout_ms))?;

        let mut buf = vec![0u8; 256];
        let mut total = match port.read(&mut buf) {
            Ok(0) => return Err(Error::ReadTimeout),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::TimedOut => return Err(Error::ReadTimeout),
            Err(e) => return Err(e.into()),
        };

        // One bounded re-poll for bytes still in flight
        std::thread::sleep(repoll);
        let pending = port.bytes_to_read()? as usize;
        if pending > 0 && total < buf.len() {
            let end = (total + pending).min(buf.len());
            match port.read(&mut buf[total..end]) {
                Ok(n) => total += n,
                Err(e) if e.kind() == ErrorKind::TimedOut => {}
                Err(e) => return Err(e.into()),
            }
        }

        buf.truncate(total);
        Ok(buf)
    }

    fn port_name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn close(&mut self) -> Result<()> {
        if self.port.take().is_some() {
            log::info!("Disconnected from serial port {}", self.name);
        }
        Ok(())
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
