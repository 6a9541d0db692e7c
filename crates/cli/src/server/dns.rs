use relaydns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tracing::{debug, error, info};

const RECV_BUFFER_SIZE: usize = 4096;
const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(50);

/// Bind the UDP listener. Failure here is a fatal startup error.
pub fn bind_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
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
    Ok(UdpSocket::from_std(std_socket)?)
}

/// Receive loop. Each datagram is resolved on its own task so a slow
/// upstream exchange never stalls other clients. At most `max_inflight`
/// tasks run at once; datagrams arriving beyond that are dropped.
pub async fn start_dns_server(
    socket: UdpSocket,
    handler: DnsServerHandler,
    max_inflight: usize,
) -> anyhow::Result<()> {
    let local_addr = socket.local_addr()?;
    info!(bind_address = %local_addr, max_inflight, "DNS server ready");

    let socket = Arc::new(socket);
    let handler = Arc::new(handler);
    let inflight = Arc::new(Semaphore::new(max_inflight));
    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                tokio::time::sleep(RECV_ERROR_BACKOFF).await;
                continue;
            }
        };

        let permit = match inflight.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                debug!(client = %from, max_inflight, "In-flight limit reached, dropping datagram");
                continue;
            }
        };

        let handler_clone = handler.clone();
        let socket_clone = socket.clone();
        let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        tokio::spawn(async move {
            let _permit = permit;
            if let Some(response) = handler_clone.handle_datagram(&owned_buf, from).await {
                if let Err(e) = socket_clone.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "Failed to send reply");
                }
            }
        });
    }
}
