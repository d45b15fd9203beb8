pub mod udp;

use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

/// One query/response round trip against a nameserver.
///
/// The resolver decides the destination per hop, so the address is a
/// call argument rather than adapter state.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send_to(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
