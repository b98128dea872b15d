//! Discovery of the host's preferred outbound address.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::net::UdpSocket;

/// Public destination used only to ask the OS for a route.
pub const PROBE_TARGET: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// Returns the local address the OS would use as source towards `target`.
///
/// Connecting a UDP socket only selects a route; no datagram leaves the
/// host.
///
/// # Errors
///
/// Returns the underlying I/O error when no socket can be bound or no
/// route to `target` exists.
pub async fn outbound_ip_towards(target: SocketAddr) -> io::Result<IpAddr> {
    let bind_addr: SocketAddr = if target.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (std::net::Ipv6Addr::UNSPECIFIED, 0).into()
    };
    let socket = UdpSocket::bind(bind_addr).await?;
    socket.connect(target).await?;
    Ok(socket.local_addr()?.ip())
}

/// Returns the host's preferred outbound address towards [`PROBE_TARGET`].
///
/// # Errors
///
/// See [`outbound_ip_towards`].
pub async fn outbound_ip() -> io::Result<IpAddr> {
    outbound_ip_towards(PROBE_TARGET).await
}
