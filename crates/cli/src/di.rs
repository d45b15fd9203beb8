use rootwalk_application::use_cases::ResolveDomainUseCase;
use rootwalk_domain::{Config, DomainError};
use rootwalk_infrastructure::dns::{RecursiveResolver, UdpTransport};
use std::sync::Arc;

pub struct Services {
    pub resolve_domain: ResolveDomainUseCase,
}

impl Services {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let transport = Arc::new(UdpTransport::new());
        let resolver = Arc::new(RecursiveResolver::from_config(transport, &config.resolver)?);

        Ok(Self {
            resolve_domain: ResolveDomainUseCase::new(resolver),
        })
    }
}
