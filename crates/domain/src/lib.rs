//! Rootwalk Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod errors;

pub use config::{CliOverrides, Config, LoggingConfig, ResolverConfig};
pub use dns_message::{
    Header, Message, Question, RData, RecordClass, RecordType, ResourceRecord,
};
pub use dns_query::DnsQuery;
pub use errors::{DomainError, ErrorKind};
