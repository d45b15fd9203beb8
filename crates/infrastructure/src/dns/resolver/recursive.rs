//! Iterative resolution by walking delegations from a root server.
//!
//! Each hop asks one nameserver and inspects the response: an answer
//! ends the walk, a referral with glue names the next hop directly,
//! and a referral without glue forces a nested resolution of the
//! nameserver's own address. The nested walk shares the outer hop
//! budget, so total network work per resolution stays bounded no
//! matter how delegations nest.

use crate::dns::transport::DnsTransport;
use crate::dns::wire::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::config::ResolverConfig;
use rootwalk_domain::{DnsQuery, DomainError, Message, RecordType};
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const RCODE_NXDOMAIN: u8 = 3;

/// Shared round-trip allowance for one top-level resolution, nested
/// nameserver lookups included.
struct HopBudget {
    limit: u32,
    remaining: AtomicU32,
}

impl HopBudget {
    fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: AtomicU32::new(limit),
        }
    }

    fn spend(&self, domain: &str) -> Result<(), DomainError> {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| v.checked_sub(1))
            .map(|_| ())
            .map_err(|_| DomainError::HopLimitExceeded(domain.to_string()))
    }

    fn used(&self) -> u32 {
        self.limit - self.remaining.load(Ordering::SeqCst)
    }
}

pub struct RecursiveResolver {
    transport: Arc<dyn DnsTransport>,
    root_server: IpAddr,
    port: u16,
    query_timeout: Duration,
    max_hops: u32,
}

impl RecursiveResolver {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        root_server: IpAddr,
        port: u16,
        query_timeout: Duration,
        max_hops: u32,
    ) -> Self {
        info!(
            root = %root_server,
            max_hops = max_hops,
            timeout_ms = query_timeout.as_millis() as u64,
            "Recursive resolver created"
        );

        Self {
            transport,
            root_server,
            port,
            query_timeout,
            max_hops,
        }
    }

    pub fn from_config(
        transport: Arc<dyn DnsTransport>,
        config: &ResolverConfig,
    ) -> Result<Self, DomainError> {
        let root_server = config.root_server.parse().map_err(|_| {
            DomainError::ConfigError(format!(
                "root_server '{}' is not an IP address",
                config.root_server
            ))
        })?;

        Ok(Self::new(
            transport,
            root_server,
            config.port,
            Duration::from_millis(config.query_timeout_ms),
            config.max_hops,
        ))
    }

    /// One query round trip: fresh transaction id, flags clear, single
    /// question. The response must echo the id.
    async fn query_server(
        &self,
        domain: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<Message, DomainError> {
        let (id, query_bytes) = MessageBuilder::build_query_with_id(domain, record_type)?;

        debug!(
            domain = %domain,
            record_type = %record_type,
            server = %server,
            id = id,
            "Querying nameserver"
        );

        let response_bytes = self
            .transport
            .send_to(&query_bytes, server, self.query_timeout)
            .await?;
        let message = ResponseParser::parse(&response_bytes)?;

        if message.header.id != id {
            return Err(DomainError::TransactionIdMismatch {
                sent: id,
                got: message.header.id,
            });
        }
        if message.header.is_truncated() {
            warn!(
                domain = %domain,
                server = %server,
                "Truncated response, no TCP fallback; using the partial message"
            );
        }

        Ok(message)
    }

    fn resolve_at<'a>(
        &'a self,
        domain: &'a str,
        record_type: RecordType,
        budget: &'a HopBudget,
    ) -> Pin<Box<dyn Future<Output = Result<DnsResolution, DomainError>> + Send + 'a>> {
        Box::pin(async move {
            let mut nameserver = self.root_server;

            loop {
                budget.spend(domain)?;

                let server = SocketAddr::new(nameserver, self.port);
                let message = self.query_server(domain, record_type, server).await?;

                if let Some(answer) = message.answers.first() {
                    let data = answer.rdata.presentation().ok_or(
                        DomainError::UnsupportedRecordData(answer.record_type.to_u16()),
                    )?;
                    debug!(
                        domain = %domain,
                        record_type = %answer.record_type,
                        data = %data,
                        server = %server,
                        "Answer received"
                    );
                    return Ok(DnsResolution {
                        data,
                        record_type: answer.record_type,
                        server,
                        hops: budget.used(),
                    });
                }

                if message.header.response_code() == RCODE_NXDOMAIN {
                    debug!(domain = %domain, server = %server, "NXDOMAIN");
                    return Err(DomainError::NxDomain);
                }

                if let Some((host, glue_addr)) = message.find_glue() {
                    debug!(
                        domain = %domain,
                        nameserver = %host,
                        glue = %glue_addr,
                        "Following referral with glue"
                    );
                    nameserver = IpAddr::V4(glue_addr);
                    continue;
                }

                if let Some(referred) = message.first_referral() {
                    let referred = referred.to_string();
                    debug!(
                        domain = %domain,
                        nameserver = %referred,
                        "Referral without glue, resolving the nameserver address first"
                    );
                    let sub = self.resolve_at(&referred, RecordType::A, budget).await?;
                    nameserver = sub
                        .data
                        .parse()
                        .map_err(|_| DomainError::UnresolvableNameserver(referred))?;
                    continue;
                }

                return Err(DomainError::DeadEndResponse {
                    server: server.to_string(),
                    domain: domain.to_string(),
                });
            }
        })
    }
}

#[async_trait]
impl DnsResolver for RecursiveResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let budget = HopBudget::new(self.max_hops);
        self.resolve_at(&query.domain, query.record_type, &budget)
            .await
    }
}
