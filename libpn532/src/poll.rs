// libpn532/src/poll.rs
//! Background tag polling.
//!
//! [`PollLoop`] owns an initialized device and repeats detection until a tag
//! yields a [`TagReading`] or the loop is cancelled. Progress is reported as
//! [`PollEvent`]s through an [`EventSink`]; with the `async` feature the loop
//! runs on a blocking tokio task and events arrive on a channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::constants::TAG_FIRST_USER_PAGE;
use crate::device::{Device, Initialized};
use crate::protocol::responses::TargetInfo;
use crate::tag::amiibo::{self, AmiiboCredential, CharacterLookup};
use crate::tag::ndef::{self, NdefContent};
use crate::tag::{CharacterInfo, MemoryUsage, Protection, Tag, TagLink, TagReading};
use crate::transport::PortMonitor;
use crate::types::PageData;
use crate::utils::{ms, timeout};
use crate::{Error, Result};

/// Last page read when looking for the NDEF terminator (NTAG215 user area).
pub const DEFAULT_MAX_PAGE: u8 = 0x81;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Pause between two detection attempts that found nothing.
    pub interval: Duration,
    pub max_page: u8,
    /// Read the capability container to tell NTAG densities apart.
    pub probe_variant: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: ms(timeout::DEFAULT_POLL_INTERVAL_MS),
            max_page: DEFAULT_MAX_PAGE,
            probe_variant: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Probing,
    Detected,
    Classifying,
    Reading,
    Authenticating,
    Reporting,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Connected { port: Option<String> },
    Disconnected,
    PortLost { port: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    State(PollState),
    Status(LinkStatus),
    Reading(TagReading),
    /// The loop halted on a non-benign error.
    Failed(String),
}

/// Receives poll events.
pub trait EventSink {
    fn emit(&mut self, event: PollEvent);
}

impl EventSink for Vec<PollEvent> {
    fn emit(&mut self, event: PollEvent) {
        self.push(event);
    }
}

#[cfg(feature = "async")]
impl EventSink for tokio::sync::mpsc::UnboundedSender<PollEvent> {
    fn emit(&mut self, event: PollEvent) {
        // A dropped receiver only means nobody is listening any more
        let _ = self.send(event);
    }
}

/// Waits between detection attempts. Injected so tests run without a clock.
pub trait Sleeper: Send {
    fn sleep(&mut self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Cooperative cancellation flag shared between the loop and its owner.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Device link that refuses to start an exchange once the loop is
/// cancelled. Multi-page reads go through it so they stop between pages.
struct CancellableLink<'a> {
    device: &'a mut Device<Initialized>,
    cancel: &'a CancelToken,
}

impl CancellableLink<'_> {
    fn checkpoint(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl TagLink for CancellableLink<'_> {
    fn read_page(&mut self, page: u8) -> Result<PageData> {
        self.checkpoint()?;
        self.device.read_page(page)
    }

    fn write_page(&mut self, page: u8, data: [u8; 4]) -> Result<()> {
        self.checkpoint()?;
        self.device.write_page(page, data)
    }

    fn pwd_auth(&mut self, password: [u8; 4]) -> Result<Vec<u8>> {
        self.checkpoint()?;
        self.device.pwd_auth(password)
    }

    fn reselect(&mut self) -> Result<TargetInfo> {
        self.checkpoint()?;
        self.device.detect()
    }
}

/// Single-shot polling driver: detect, classify, read, report, stop.
///
/// Cancellation is checked before every exchange and at every wait; an
/// exchange already in flight always completes first.
pub struct PollLoop<S: Sleeper = ThreadSleeper> {
    device: Device<Initialized>,
    config: PollConfig,
    cancel: CancelToken,
    sleeper: S,
    monitor: Option<PortMonitor>,
    lookup: Option<Box<dyn CharacterLookup>>,
    state: PollState,
}

impl PollLoop<ThreadSleeper> {
    pub fn new(device: Device<Initialized>, config: PollConfig) -> Self {
        Self {
            device,
            config,
            cancel: CancelToken::new(),
            sleeper: ThreadSleeper,
            monitor: None,
            lookup: None,
            state: PollState::Idle,
        }
    }
}

impl<S: Sleeper> PollLoop<S> {
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> PollLoop<T> {
        PollLoop {
            device: self.device,
            config: self.config,
            cancel: self.cancel,
            sleeper,
            monitor: self.monitor,
            lookup: self.lookup,
            state: self.state,
        }
    }

    pub fn with_monitor(mut self, monitor: PortMonitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    pub fn with_lookup(mut self, lookup: Box<dyn CharacterLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn into_device(self) -> Device<Initialized> {
        self.device
    }

    /// Poll until a tag is read (`Ok(Some)`), the loop is cancelled
    /// (`Ok(None)`) or a non-benign error halts it.
    ///
    /// "No tag" outcomes are retried without limit.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<Option<TagReading>> {
        sink.emit(PollEvent::Status(LinkStatus::Connected {
            port: self.device.port_name(),
        }));

        match self.poll_until_read(sink) {
            Ok(reading) => {
                self.set_state(PollState::Reporting, sink);
                log::info!("Tag read complete: {} {}", reading.family, reading.uid_hex());
                sink.emit(PollEvent::Reading(reading.clone()));
                self.set_state(PollState::Idle, sink);
                Ok(Some(reading))
            }
            Err(Error::Cancelled) => {
                log::info!("Polling cancelled");
                self.set_state(PollState::Cancelled, sink);
                Ok(None)
            }
            Err(e) => {
                log::error!("Polling halted: {}", e);
                match &e {
                    Error::PortLost { port } => sink.emit(PollEvent::Status(LinkStatus::PortLost {
                        port: port.clone(),
                    })),
                    Error::LinkClosed => sink.emit(PollEvent::Status(LinkStatus::Disconnected)),
                    _ => {}
                }
                sink.emit(PollEvent::Failed(e.to_string()));
                self.set_state(PollState::Idle, sink);
                Err(e)
            }
        }
    }

    fn poll_until_read(&mut self, sink: &mut dyn EventSink) -> Result<TagReading> {
        loop {
            self.checkpoint()?;
            self.set_state(PollState::Probing, sink);

            let outcome = match self.device.detect() {
                Ok(target) => {
                    self.set_state(PollState::Detected, sink);
                    self.read_target(target, sink)
                }
                Err(e) => Err(e),
            };

            match outcome {
                Ok(reading) => return Ok(reading),
                Err(e) if e.is_benign() => {
                    log::debug!("No tag this cycle: {}", e);
                    self.set_state(PollState::Idle, sink);
                    self.wait()?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_target(&mut self, target: TargetInfo, sink: &mut dyn EventSink) -> Result<TagReading> {
        self.set_state(PollState::Classifying, sink);
        let mut tag = Tag::from(target);
        log::info!("Tag Type: {}", tag.family());

        let total = if self.config.probe_variant {
            tag.probe_variant(&mut self.link())
        } else {
            None
        };

        self.checkpoint()?;
        self.set_state(PollState::Reading, sink);
        let max_page = self.config.max_page;
        let first = self.link().read_page(TAG_FIRST_USER_PAGE);
        match first {
            Ok(first) => {
                // A cancelled read is dropped, never reported as partial
                let read = ndef::continue_blocks(&mut self.link(), &first, max_page)?;
                Ok(TagReading {
                    family: tag.family(),
                    uid: tag.uid().clone(),
                    protection: Protection::Unprotected,
                    memory: total.map(|total| MemoryUsage {
                        total,
                        used: read.used_bytes(),
                    }),
                    content: NdefContent::from_read(&read),
                    incomplete: read.is_incomplete(),
                    character: None,
                })
            }
            Err(Error::TagStatus { status }) => {
                log::info!("Plain read rejected (status {:#04x}): tag is protected", status);
                tag.mark_protected();
                self.read_protected(tag, total, sink)
            }
            Err(e) => Err(e),
        }
    }

    fn read_protected(
        &mut self,
        tag: Tag,
        total: Option<usize>,
        sink: &mut dyn EventSink,
    ) -> Result<TagReading> {
        let mut reading = TagReading {
            family: tag.family(),
            uid: tag.uid().clone(),
            protection: Protection::Protected,
            memory: total.map(|total| MemoryUsage { total, used: 0 }),
            content: NdefContent::Empty,
            incomplete: false,
            character: None,
        };
        if !tag.family().may_be_amiibo() {
            return Ok(reading);
        }

        self.checkpoint()?;
        self.set_state(PollState::Authenticating, sink);
        // The tag halted on the rejected read
        self.link().reselect()?;

        let credential = AmiiboCredential::from_uid(tag.uid())?;
        match amiibo::authenticate(&mut self.link(), &credential) {
            Ok(()) => {
                let id = amiibo::read_character_id(&mut self.link())?;
                let name = amiibo::resolve_identity(self.lookup.as_deref(), id);
                log::info!("Character: {}", name);
                reading.protection = Protection::Authenticated;
                reading.character = Some(CharacterInfo {
                    char_id: id.char_id,
                    variation: id.variation,
                    name,
                });
            }
            Err(Error::AuthenticationFailed { status }) => {
                log::warn!("Amiibo authentication failed (status {:#04x})", status);
                reading.protection = Protection::AuthFailed;
            }
            Err(e) => return Err(e),
        }
        Ok(reading)
    }

    fn link(&mut self) -> CancellableLink<'_> {
        CancellableLink {
            device: &mut self.device,
            cancel: &self.cancel,
        }
    }

    fn checkpoint(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Wait boundary: cancellation and port presence are checked on both
    /// sides of the sleep.
    fn wait(&mut self) -> Result<()> {
        self.checkpoint()?;
        self.check_port()?;
        self.sleeper.sleep(self.config.interval);
        self.checkpoint()?;
        self.check_port()
    }

    fn check_port(&self) -> Result<()> {
        match &self.monitor {
            Some(monitor) => monitor.check(),
            None => Ok(()),
        }
    }

    fn set_state(&mut self, state: PollState, sink: &mut dyn EventSink) {
        if self.state != state {
            log::debug!("Poll state: {:?} -> {:?}", self.state, state);
            self.state = state;
            sink.emit(PollEvent::State(state));
        }
    }
}

#[cfg(feature = "async")]
mod worker {
    use super::*;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
    use tokio::task::JoinHandle;

    /// What the worker hands back once it stops.
    pub struct PollOutcome {
        pub device: Device<Initialized>,
        pub result: Result<Option<TagReading>>,
    }

    /// Handle to a poll loop running on a blocking tokio task.
    pub struct PollHandle {
        events: UnboundedReceiver<PollEvent>,
        cancel: CancelToken,
        join: JoinHandle<PollOutcome>,
    }

    impl<S: Sleeper + 'static> PollLoop<S> {
        /// Move the loop onto `spawn_blocking`. Must be called inside a
        /// tokio runtime.
        pub fn spawn(self) -> PollHandle {
            let (tx, rx) = unbounded_channel();
            let cancel = self.cancel_token();
            let mut this = self;
            let join = tokio::task::spawn_blocking(move || {
                let mut sink = tx;
                let result = this.run(&mut sink);
                PollOutcome {
                    device: this.into_device(),
                    result,
                }
            });
            PollHandle {
                events: rx,
                cancel,
                join,
            }
        }
    }

    impl PollHandle {
        pub fn cancel_token(&self) -> CancelToken {
            self.cancel.clone()
        }

        /// Next event; `None` once the worker finished and the channel
        /// drained.
        pub async fn recv(&mut self) -> Option<PollEvent> {
            self.events.recv().await
        }

        pub fn cancel(&self) {
            self.cancel.cancel();
        }

        /// Wait for the worker to stop on its own.
        pub async fn join(self) -> Result<PollOutcome> {
            self.join.await.map_err(|e| Error::Worker(e.to_string()))
        }

        /// Cancel, wait for the current cycle to observe it, then release
        /// the link.
        pub async fn disconnect(self) -> Result<()> {
            self.cancel();
            let mut outcome = self.join().await?;
            outcome.device.close()?;
            log::info!("Disconnected");
            Ok(())
        }
    }
}

#[cfg(feature = "async")]
pub use worker::{PollHandle, PollOutcome};
