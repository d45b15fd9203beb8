#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError, RecordType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockDnsResolver {
    responses: Mutex<HashMap<String, Result<DnsResolution, DomainError>>>,
    calls: AtomicUsize,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, domain: &str, data: &str) {
        self.responses.lock().unwrap().insert(
            domain.to_string(),
            Ok(DnsResolution {
                data: data.to_string(),
                record_type: RecordType::A,
                server: "198.41.0.4:53".parse().unwrap(),
                hops: 1,
            }),
        );
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .get(&*query.domain)
            .cloned()
            .unwrap_or(Err(DomainError::NxDomain))
    }
}
