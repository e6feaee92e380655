use super::messages::{a_response, MOCK_TTL};
use async_trait::async_trait;
use origin_relay_application::ports::UpstreamTransport;
use origin_relay_domain::{DomainError, UpstreamEndpoint};
use std::sync::Mutex;
use std::time::Duration;

enum Behavior {
    Answer { rcode: u8 },
    Timeout,
}

/// Transport double that records every packet it is asked to send.
pub struct RecordingTransport {
    sent: Mutex<Vec<(UpstreamEndpoint, Vec<u8>)>>,
    behavior: Mutex<Behavior>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            behavior: Mutex::new(Behavior::Answer { rcode: 0 }),
        }
    }

    pub fn answering_with_rcode(rcode: u8) -> Self {
        let transport = Self::new();
        *transport.behavior.lock().unwrap() = Behavior::Answer { rcode };
        transport
    }

    pub fn timing_out() -> Self {
        let transport = Self::new();
        *transport.behavior.lock().unwrap() = Behavior::Timeout;
        transport
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<(UpstreamEndpoint, Vec<u8>)> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl UpstreamTransport for RecordingTransport {
    async fn exchange(
        &self,
        upstream: UpstreamEndpoint,
        query: &[u8],
        _timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        self.sent.lock().unwrap().push((upstream, query.to_vec()));

        match *self.behavior.lock().unwrap() {
            Behavior::Answer { rcode } => Ok(a_response(query, MOCK_TTL, rcode)),
            Behavior::Timeout => Err(DomainError::TransportTimeout {
                server: upstream.to_string(),
            }),
        }
    }
}
