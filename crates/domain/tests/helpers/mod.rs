#![allow(dead_code)]
use rootwalk_domain::{Header, Message, RData, RecordClass, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

pub struct ResourceRecordBuilder {
    name: String,
    record_type: RecordType,
    class: RecordClass,
    ttl: u32,
    rdlength: u16,
    rdata: RData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl: 300,
            rdlength: 4,
            rdata: RData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn a(mut self, addr: &str) -> Self {
        self.record_type = RecordType::A;
        self.rdlength = 4;
        self.rdata = RData::A(addr.parse().unwrap());
        self
    }

    pub fn aaaa(mut self, addr: &str) -> Self {
        self.record_type = RecordType::AAAA;
        self.rdlength = 16;
        self.rdata = RData::Aaaa(addr.parse().unwrap());
        self
    }

    pub fn ns(mut self, host: &str) -> Self {
        self.record_type = RecordType::NS;
        self.rdlength = 0;
        self.rdata = RData::Ns(host.to_string());
        self
    }

    pub fn cname(mut self, host: &str) -> Self {
        self.record_type = RecordType::CNAME;
        self.rdlength = 0;
        self.rdata = RData::Cname(host.to_string());
        self
    }

    pub fn opaque(mut self, record_type: RecordType, bytes: &[u8]) -> Self {
        self.record_type = record_type;
        self.rdlength = bytes.len() as u16;
        self.rdata = RData::Opaque(bytes.to_vec());
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord {
            name: self.name,
            record_type: self.record_type,
            class: self.class,
            ttl: self.ttl,
            rdlength: self.rdlength,
            rdata: self.rdata,
        }
    }
}

impl Default for ResourceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Message with the given sections and a header whose counts match.
pub fn message(
    answers: Vec<ResourceRecord>,
    nameservers: Vec<ResourceRecord>,
    additional: Vec<ResourceRecord>,
) -> Message {
    let header = Header {
        id: 1,
        flags: Header::FLAG_QR,
        qdcount: 0,
        ancount: answers.len() as u16,
        nscount: nameservers.len() as u16,
        arcount: additional.len() as u16,
    };
    Message {
        header,
        questions: vec![],
        answers,
        nameservers,
        additional,
    }
}
