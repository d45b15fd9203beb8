use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError, RecordType};
use std::net::SocketAddr;

/// Outcome of a successful recursive walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResolution {
    /// Answer rendered as text: dotted IPv4, RFC 5952 IPv6, or a bare
    /// hostname for name-typed answers.
    pub data: String,
    /// Type of the record actually answered. May differ from the
    /// question type, e.g. a CNAME answer to an A question.
    pub record_type: RecordType,
    /// Nameserver that produced the final answer.
    pub server: SocketAddr,
    /// Nameserver round trips spent, nested lookups included.
    pub hops: u32,
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;
}
