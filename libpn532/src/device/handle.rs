// libpn532/src/device/handle.rs

use std::marker::PhantomData;

use crate::constants::{PN532_ACK, TAG_CMD_PWD_AUTH};
use crate::device::config::{AckEcho, DeviceConfig};
use crate::protocol::codec;
use crate::protocol::responses::{GeneralStatus, TargetInfo};
use crate::protocol::{Command, Response, TagCommand};
use crate::transport::Transport;
use crate::types::{FirmwareVersion, PageData};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Outcome of one command/response cycle.
///
/// `matched` is true only when the expected `D5 <code>` prefix was found
/// after the leading ACK was stripped. `payload` then holds the response
/// body starting at that prefix; otherwise it holds the bytes that did
/// arrive, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResult {
    pub matched: bool,
    pub payload: Vec<u8>,
}

/// Device handle that enforces initialization state at compile time.
///
/// All traffic goes through `&mut self`, so at most one exchange is ever in
/// flight on the link. Sharing a device between threads means moving it or
/// putting it behind a lock.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: DeviceConfig,
    firmware: Option<FirmwareVersion>,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn port_name(&self) -> Option<String> {
        self.transport.port_name()
    }

    /// Run one request/ACK/response cycle. No retry happens here.
    pub fn exchange(&mut self, cmd: &Command) -> Result<ExchangeResult> {
        let label = cmd.label();
        let frame = codec::encode_command_frame(cmd)?;

        self.transport.send_with_wakeup(&frame)?;
        log::debug!("{} Sent: {}", label, bytes_to_hex_spaced(&frame));

        let timeout_ms = self.config.read_timeout_ms();
        let mut raw = self.receive_logged(label, timeout_ms)?;

        if codec::is_nack(&raw) {
            log::warn!("{} Received NACK", label);
            return Err(Error::Nack);
        }

        let (acked, rest) = codec::strip_ack(&raw);
        let mut data = rest.to_vec();
        if acked {
            log::debug!("{} Received ACK", label);
            if self.config.ack_echo == AckEcho::OnAck {
                self.echo_ack(label);
            }
            // ACK arrived on its own; the reply follows in a second read
            if data.is_empty() {
                raw = self.receive_logged(label, timeout_ms)?;
                data = raw;
            }
        }

        let prefix = cmd.response_prefix();
        let Some(offset) = codec::find_response_prefix(&data, prefix) else {
            log::debug!("{} prefix {:02X?} not found", label, prefix);
            return Ok(ExchangeResult {
                matched: false,
                payload: data,
            });
        };

        if acked && self.config.ack_echo == AckEcho::OnMatch {
            self.echo_ack(label);
        }

        let body = codec::response_body(&data, offset)?.to_vec();
        Ok(ExchangeResult {
            matched: true,
            payload: body,
        })
    }

    /// Exchange and decode; an unmatched reply becomes `PrefixNotFound`.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        let result = self.exchange(&cmd)?;
        if !result.matched {
            return Err(Error::PrefixNotFound {
                expected: cmd.response_prefix(),
                received: result.payload,
            });
        }
        Response::decode(cmd.command_code(), &result.payload)
    }

    /// Release the link. Further exchanges fail with `LinkClosed`.
    pub fn close(&mut self) -> Result<()> {
        self.transport.close()
    }

    /// Give the transport back, e.g. to re-initialize after a reconnect.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }

    fn receive_logged(&mut self, label: &str, timeout_ms: u64) -> Result<Vec<u8>> {
        match self.transport.receive(timeout_ms) {
            Ok(raw) => {
                log::debug!("{} Received: {}", label, bytes_to_hex_spaced(&raw));
                Ok(raw)
            }
            Err(Error::ReadTimeout) => {
                log::debug!("{}: Read timeout occurred.", label);
                Err(Error::ReadTimeout)
            }
            Err(e) => Err(e),
        }
    }

    fn echo_ack(&mut self, label: &str) {
        match self.transport.send(&PN532_ACK) {
            Ok(()) => log::debug!("{} Sent ACK", label),
            Err(e) => log::warn!("{} ACK echo failed: {}", label, e),
        }
    }
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance with the default
    /// config.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Result<Self> {
        Self::with_config(transport, DeviceConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: DeviceConfig) -> Result<Self> {
        Ok(Self {
            transport,
            config,
            firmware: None,
            _state: PhantomData,
        })
    }

    /// Run SAM configuration (normal mode) and read the firmware version.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;

        match this.execute(Command::SamConfiguration)? {
            Response::SamConfiguration => {}
            other => {
                return Err(Error::FrameFormat(format!(
                    "unexpected SAM configuration reply: {:?}",
                    other
                )));
            }
        }

        let firmware = match this.execute(Command::GetFirmwareVersion)? {
            Response::FirmwareVersion(fw) => fw,
            other => {
                return Err(Error::FrameFormat(format!(
                    "unexpected firmware reply: {:?}",
                    other
                )));
            }
        };
        log::info!("{}", firmware);

        Ok(Device {
            transport: this.transport,
            config: this.config,
            firmware: Some(firmware),
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Firmware version read during initialization.
    pub fn firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    pub fn general_status(&mut self) -> Result<GeneralStatus> {
        match self.execute(Command::GetGeneralStatus)? {
            Response::GeneralStatus(status) => Ok(status),
            other => Err(unexpected(&other)),
        }
    }

    /// List one ISO14443-A target. `NoTarget` when the field is empty.
    pub fn detect(&mut self) -> Result<TargetInfo> {
        match self.execute(Command::detect_iso14443a())? {
            Response::InListPassiveTarget(Some(target)) => {
                log::info!(
                    "Target found: ATQA={:04X} SAK={:02X} UID={}",
                    target.atqa.as_u16(),
                    target.sak,
                    target.uid.to_hex()
                );
                Ok(target)
            }
            Response::InListPassiveTarget(None) => Err(Error::NoTarget),
            other => Err(unexpected(&other)),
        }
    }

    /// InDataExchange with logical target 1. Returns the tag's data when
    /// the status byte is zero.
    pub fn data_exchange(&mut self, command: TagCommand) -> Result<Vec<u8>> {
        match self.execute(Command::exchange(command))? {
            Response::InDataExchange { status: 0, data } => Ok(data),
            Response::InDataExchange { status, .. } => Err(Error::TagStatus { status }),
            other => Err(unexpected(&other)),
        }
    }

    /// Read one page. The tag answers with 16 bytes (four pages); only the
    /// addressed page is kept.
    pub fn read_page(&mut self, page: u8) -> Result<PageData> {
        let data = self.data_exchange(TagCommand::Read { page })?;
        PageData::try_from(data.as_slice())
    }

    pub fn write_page(&mut self, page: u8, data: [u8; 4]) -> Result<()> {
        self.data_exchange(TagCommand::Write { page, data })?;
        log::debug!("Wrote page {:#04x}: {}", page, bytes_to_hex_spaced(&data));
        Ok(())
    }

    /// Send PWD_AUTH. Returns the 2-byte PACK the tag answered with (empty
    /// when the reader did not forward it).
    pub fn pwd_auth(&mut self, password: [u8; 4]) -> Result<Vec<u8>> {
        match self.data_exchange(TagCommand::PwdAuth { password }) {
            Ok(pack) => Ok(pack),
            Err(Error::TagStatus { status }) => {
                log::warn!(
                    "Auth command {:#04x} rejected with status {:#04x}",
                    TAG_CMD_PWD_AUTH,
                    status
                );
                Err(Error::AuthenticationFailed { status })
            }
            Err(e) => Err(e),
        }
    }
}

fn unexpected(resp: &Response) -> Error {
    Error::FrameFormat(format!("unexpected response: {:?}", resp))
}
