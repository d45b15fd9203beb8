//! DNS query construction in wire format.
//!
//! Queries carry a fresh random id, no flags (the resolver walks the
//! delegation itself instead of requesting recursion), and a single
//! question.

use super::{MAX_LABEL_LEN, MAX_NAME_LEN};
use rootwalk_domain::{DomainError, Header, Question, RecordType};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message and serialize it to wire format bytes.
    pub fn build_query(domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(domain, record_type).map(|(_, bytes)| bytes)
    }

    /// Build a query and return its transaction id alongside the bytes,
    /// for matching the response to the request.
    pub fn build_query_with_id(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let header = Header::query(id, 1);
        let question = Question::new(domain, record_type);

        let mut bytes = Vec::with_capacity(12 + domain.len() + 6);
        bytes.extend_from_slice(&Self::encode_header(&header));
        Self::encode_question(&question, &mut bytes)?;
        Ok((id, bytes))
    }

    /// Six big-endian u16 fields, 12 bytes.
    pub fn encode_header(header: &Header) -> [u8; 12] {
        let mut out = [0u8; 12];
        let fields = [
            header.id,
            header.flags,
            header.qdcount,
            header.ancount,
            header.nscount,
            header.arcount,
        ];
        for (chunk, field) in out.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        out
    }

    /// Length-prefixed labels followed by a zero octet. No compression
    /// is ever produced.
    pub fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), DomainError> {
        let start = out.len();
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::LabelTooLong(label.len()));
            }
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        if out.len() - start > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong);
        }
        Ok(())
    }

    pub fn encode_question(question: &Question, out: &mut Vec<u8>) -> Result<(), DomainError> {
        Self::encode_name(&question.name, out)?;
        out.extend_from_slice(&question.record_type.to_u16().to_be_bytes());
        out.extend_from_slice(&question.class.to_u16().to_be_bytes());
        Ok(())
    }
}
