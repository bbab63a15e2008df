// libpn532/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    responses: VecDeque<Vec<u8>>,
    closed: bool,
}

/// Mock transport for unit tests. It records written buffers and returns
/// queued responses, one per `receive`.
///
/// Clones share state, so a test can keep a probe after handing the
/// transport to a `Device`. An empty queued response, like an exhausted
/// queue, reads as `Error::ReadTimeout`.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
    port: Option<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that reports a port name (for port-monitor tests).
    pub fn with_port(port: &str) -> Self {
        Self {
            state: Arc::default(),
            port: Some(port.to_string()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn push_response(&self, resp: Vec<u8>) {
        self.lock().responses.push_back(resp);
    }

    /// Queue a receive that times out.
    pub fn push_timeout(&self) {
        self.lock().responses.push_back(Vec::new());
    }

    /// Every buffer written so far, oldest first.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    pub fn pending_responses(&self) -> usize {
        self.lock().responses.len()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut st = self.lock();
        if st.closed {
            return Err(Error::LinkClosed);
        }
        st.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        let mut st = self.lock();
        if st.closed {
            return Err(Error::LinkClosed);
        }
        match st.responses.pop_front() {
            Some(resp) if !resp.is_empty() => Ok(resp),
            _ => Err(Error::ReadTimeout),
        }
    }

    fn port_name(&self) -> Option<String> {
        self.port.clone()
    }

    fn close(&mut self) -> Result<()> {
        self.lock().closed = true;
        Ok(())
    }
}
