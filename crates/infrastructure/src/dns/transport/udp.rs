//! UDP transport for DNS queries (RFC 1035 §4.2.1).
//!
//! Messages are sent as-is, no framing. Responses are limited to 512
//! usable bytes without EDNS(0); the receive buffer is twice that to
//! tolerate servers that send more. A truncated (TC) response is the
//! caller's concern; there is no TCP fallback.

use super::DnsTransport;
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::io::ErrorKind as IoErrorKind;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Receive buffer size per query.
const RECV_BUFFER_SIZE: usize = 1024;

/// DNS over UDP, one ephemeral socket per query.
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send_to(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to an ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            "0.0.0.0:0".parse().map_err(|e| {
                DomainError::IoError(format!("Failed to build bind address: {}", e))
            })?
        } else {
            "[::]:0".parse().map_err(|e| {
                DomainError::IoError(format!("Failed to build bind address: {}", e))
            })?
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| map_io_error(e, server))?;

        debug!(
            server = %server,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; RECV_BUFFER_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::TransportTimeout {
                    server: server.to_string(),
                })?
                .map_err(|e| map_io_error(e, server))?;

        // Validate response came from the queried server
        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

fn map_io_error(error: std::io::Error, server: SocketAddr) -> DomainError {
    match error.kind() {
        IoErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
            server: server.to_string(),
        },
        IoErrorKind::TimedOut | IoErrorKind::WouldBlock => DomainError::TransportTimeout {
            server: server.to_string(),
        },
        _ => DomainError::IoError(format!("UDP exchange with {} failed: {}", server, error)),
    }
}
