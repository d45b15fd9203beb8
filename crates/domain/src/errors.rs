use crate::dns_message::RecordType;
use thiserror::Error;

/// Broad failure classes, so callers can tell a hostile or corrupt
/// response apart from a nameserver that simply did not help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    UnsupportedRecord,
    Resolution,
    Transport,
    Config,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Buffer underflow reading {context} at offset {offset}")]
    BufferUnderflow {
        context: &'static str,
        offset: usize,
    },

    #[error("Compression pointer at offset {at} targets offset {target}")]
    PointerNotBackward { at: usize, target: usize },

    #[error("Compression pointer target {target} outside message of {len} bytes")]
    PointerOutOfBounds { target: usize, len: usize },

    #[error("Compression pointer chain exceeded {0} jumps")]
    PointerChainTooDeep(usize),

    #[error("Reserved label length bits in {0:#04x}")]
    ReservedLabelBits(u8),

    #[error("Label of {0} bytes exceeds the 63 byte limit")]
    LabelTooLong(usize),

    #[error("Encoded name exceeds 255 bytes")]
    NameTooLong,

    #[error("Unknown record type code {0} in question")]
    UnknownQuestionType(u16),

    #[error("Unknown record class code {0}")]
    UnknownRecordClass(u16),

    #[error("{record_type} rdata of {actual} bytes, expected {expected}")]
    InvalidRdataLength {
        record_type: RecordType,
        expected: usize,
        actual: usize,
    },

    #[error("Response id {got:#06x} does not match query id {sent:#06x}")]
    TransactionIdMismatch { sent: u16, got: u16 },

    #[error("No rdata decoding for record type code {0}")]
    UnsupportedRecordData(u16),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Response from {server} had no answer, glue, or referral for {domain}")]
    DeadEndResponse { server: String, domain: String },

    #[error("Hop budget exhausted while resolving {0}")]
    HopLimitExceeded(String),

    #[error("Nameserver {0} did not resolve to an IP address")]
    UnresolvableNameserver(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidDomainName(_)
            | DomainError::BufferUnderflow { .. }
            | DomainError::PointerNotBackward { .. }
            | DomainError::PointerOutOfBounds { .. }
            | DomainError::PointerChainTooDeep(_)
            | DomainError::ReservedLabelBits(_)
            | DomainError::LabelTooLong(_)
            | DomainError::NameTooLong
            | DomainError::UnknownQuestionType(_)
            | DomainError::UnknownRecordClass(_)
            | DomainError::InvalidRdataLength { .. }
            | DomainError::TransactionIdMismatch { .. } => ErrorKind::MalformedInput,

            DomainError::UnsupportedRecordData(_) => ErrorKind::UnsupportedRecord,

            DomainError::NxDomain
            | DomainError::DeadEndResponse { .. }
            | DomainError::HopLimitExceeded(_)
            | DomainError::UnresolvableNameserver(_) => ErrorKind::Resolution,

            DomainError::TransportTimeout { .. }
            | DomainError::TransportConnectionRefused { .. }
            | DomainError::IoError(_) => ErrorKind::Transport,

            DomainError::ConfigError(_) => ErrorKind::Config,
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        self.kind() == ErrorKind::MalformedInput
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}
