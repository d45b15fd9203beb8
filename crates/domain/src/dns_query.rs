use crate::dns_message::RecordType;
use crate::errors::DomainError;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Checks the shape a name must have before it can be wire-encoded:
    /// non-empty labels of at most 63 bytes, 253 bytes of text overall.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.domain.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }
        if self.domain.len() > 253 {
            return Err(DomainError::NameTooLong);
        }
        for label in self.domain.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    self.domain
                )));
            }
            if label.len() > 63 {
                return Err(DomainError::LabelTooLong(label.len()));
            }
        }
        Ok(())
    }
}
