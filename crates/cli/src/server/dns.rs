use origin_relay_infrastructure::dns::{DnsUdpServer, ForwardingEngine};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    engine: Arc<ForwardingEngine>,
) -> anyhow::Result<()> {
    let socket = create_udp_socket(bind_addr)?;
    let server = DnsUdpServer::new(socket, engine);

    info!(bind_address = %server.local_addr()?, "DNS server listening");

    server.run().await?;
    Ok(())
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<tokio::net::UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(tokio::net::UdpSocket::from_std(std_socket)?)
}
