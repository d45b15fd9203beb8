use crate::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        query.validate()?;

        let start = Instant::now();

        match self.resolver.resolve(query).await {
            Ok(resolution) => {
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    data = %resolution.data,
                    hops = resolution.hops,
                    server = %resolution.server,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Resolution complete"
                );
                Ok(resolution)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    error = %e,
                    kind = ?e.kind(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Resolution failed"
                );
                Err(e)
            }
        }
    }
}
