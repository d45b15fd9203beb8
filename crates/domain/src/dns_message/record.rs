use super::{RecordClass, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Decoded rdata for the types this resolver interprets. Everything
/// else is carried as raw bytes so the surrounding message still
/// decodes (the wire cursor advances by `rdlength` regardless).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
    Cname(String),
    Opaque(Vec<u8>),
}

impl RData {
    /// Human-readable rendering: dotted quad, RFC 5952 IPv6 text, or
    /// the bare hostname. `None` for rdata that was not decoded.
    pub fn presentation(&self) -> Option<String> {
        match self {
            RData::A(addr) => Some(addr.to_string()),
            RData::Aaaa(addr) => Some(addr.to_string()),
            RData::Ns(host) | RData::Cname(host) => Some(host.clone()),
            RData::Opaque(_) => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, RData::Opaque(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
    /// Seconds this record may be held; informational here since no
    /// cache exists.
    pub ttl: u32,
    /// Rdata byte length as it appeared on the wire. Not re-derivable
    /// from `rdata` for name-typed records, which may have been
    /// compressed.
    pub rdlength: u16,
    pub rdata: RData,
}
