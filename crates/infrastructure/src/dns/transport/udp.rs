//! UDP exchange with an upstream resolver (RFC 1035 §4.2.1).
//!
//! One ephemeral socket per exchange, connected to the upstream so the kernel
//! filters datagrams from other peers. Replies whose id does not match the
//! query are discarded until the deadline.

use async_trait::async_trait;
use origin_relay_application::ports::UpstreamTransport;
use origin_relay_domain::config::dns::DEFAULT_UDP_BUFFER;
use origin_relay_domain::{DomainError, UpstreamEndpoint};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

pub struct UdpUpstreamTransport {
    recv_buffer: usize,
}

impl Default for UdpUpstreamTransport {
    fn default() -> Self {
        Self::new(DEFAULT_UDP_BUFFER)
    }
}

impl UdpUpstreamTransport {
    pub fn new(recv_buffer: usize) -> Self {
        Self { recv_buffer }
    }

    pub fn recv_buffer(&self) -> usize {
        self.recv_buffer
    }

    async fn exchange_inner(
        &self,
        server: SocketAddr,
        query: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let bind_addr: SocketAddr = if server.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| transport_error(server, "bind", e))?;
        socket
            .connect(server)
            .await
            .map_err(|e| transport_error(server, "connect", e))?;

        let bytes_sent = socket
            .send(query)
            .await
            .map_err(|e| transport_error(server, "send", e))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.recv_buffer];
        loop {
            let bytes_received = socket
                .recv(&mut recv_buf)
                .await
                .map_err(|e| transport_error(server, "recv", e))?;
            let response = &recv_buf[..bytes_received];

            match validate_response_id(query, response, server) {
                Ok(()) => {
                    debug!(server = %server, bytes_received, "UDP response received");
                    return Ok(response.to_vec());
                }
                Err(e) => debug!(error = %e, "Discarding stray UDP datagram"),
            }
        }
    }
}

#[async_trait]
impl UpstreamTransport for UdpUpstreamTransport {
    async fn exchange(
        &self,
        upstream: UpstreamEndpoint,
        query: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let server = upstream.socket_addr();

        tokio::time::timeout(timeout, self.exchange_inner(server, query))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
    }
}

fn transport_error(server: SocketAddr, op: &str, e: std::io::Error) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason: format!("{} failed: {}", op, e),
    }
}

pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::Transport {
            server: server.to_string(),
            reason: "message too short to carry an id".into(),
        });
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);
    if query_id != response_id {
        return Err(DomainError::Transport {
            server: server.to_string(),
            reason: format!(
                "DNS id mismatch: sent {:#06x}, got {:#06x}",
                query_id, response_id
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
