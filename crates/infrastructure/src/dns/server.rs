use super::forwarding::ForwardingEngine;
use std::io;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{error, info, warn};

/// Largest datagram the listener accepts.
const MAX_DATAGRAM: usize = 65_535;

/// UDP front end: one task per inbound datagram, replies written back on the
/// listening socket.
pub struct DnsUdpServer {
    socket: Arc<UdpSocket>,
    engine: Arc<ForwardingEngine>,
}

impl DnsUdpServer {
    pub fn new(socket: UdpSocket, engine: Arc<ForwardingEngine>) -> Self {
        Self {
            socket: Arc::new(socket),
            engine,
        }
    }

    pub fn local_addr(&self) -> io::Result<std::net::SocketAddr> {
        self.socket.local_addr()
    }

    /// Runs until the socket fails for good.
    pub async fn run(self) -> io::Result<()> {
        info!(bind_address = %self.socket.local_addr()?, "DNS listener ready");

        let mut recv_buf = vec![0u8; MAX_DATAGRAM];
        loop {
            let (len, from) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                Err(e) if is_transient(&e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
                Err(e) => {
                    error!(error = %e, "DNS listener stopped");
                    return Err(e);
                }
            };

            let owned: Arc<[u8]> = Arc::from(&recv_buf[..len]);
            let engine = Arc::clone(&self.engine);
            let socket = Arc::clone(&self.socket);
            tokio::spawn(async move {
                if let Some(reply) = engine.handle(&owned, from).await {
                    if let Err(e) = socket.send_to(&reply, from).await {
                        warn!(client = %from, error = %e, "Failed to send reply");
                    }
                }
            });
        }
    }
}

// ICMP port-unreachable from a previous send surfaces as ConnectionReset on
// some platforms; it says nothing about the listening socket itself.
fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionReset | io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
    )
}
