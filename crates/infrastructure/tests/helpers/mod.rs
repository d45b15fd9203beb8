#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_domain::{DomainError, Header, Question, RecordType};
use rootwalk_infrastructure::dns::wire::{MessageBuilder, ResponseParser};
use rootwalk_infrastructure::dns::DnsTransport;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

enum Reply {
    /// Wire bytes; the transaction id is patched to echo the query's.
    Scripted(Vec<u8>),
    /// Wire bytes returned exactly as given, id included.
    Raw(Vec<u8>),
    Error(DomainError),
}

/// Transport double scripted per (server, queried name). Every call is
/// logged so tests can assert how many round trips happened and where
/// they went.
pub struct MockTransport {
    replies: Mutex<HashMap<(IpAddr, String), Reply>>,
    log: Mutex<Vec<(IpAddr, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn script(&self, server: &str, qname: &str, response: Vec<u8>) {
        self.replies.lock().unwrap().insert(
            (server.parse().unwrap(), qname.to_string()),
            Reply::Scripted(response),
        );
    }

    pub fn script_raw(&self, server: &str, qname: &str, response: Vec<u8>) {
        self.replies.lock().unwrap().insert(
            (server.parse().unwrap(), qname.to_string()),
            Reply::Raw(response),
        );
    }

    pub fn script_error(&self, server: &str, qname: &str, error: DomainError) {
        self.replies.lock().unwrap().insert(
            (server.parse().unwrap(), qname.to_string()),
            Reply::Error(error),
        );
    }

    pub fn call_count(&self) -> usize {
        self.log.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(IpAddr, String)> {
        self.log.lock().unwrap().clone()
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .map(|(_, name)| name.clone())
            .collect()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send_to(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        _timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let query = ResponseParser::parse(message_bytes).expect("resolver sent a malformed query");
        let qname = query.questions[0].name.clone();

        self.log.lock().unwrap().push((server.ip(), qname.clone()));

        let replies = self.replies.lock().unwrap();
        match replies.get(&(server.ip(), qname.clone())) {
            Some(Reply::Scripted(bytes)) => {
                let mut bytes = bytes.clone();
                bytes[0..2].copy_from_slice(&message_bytes[0..2]);
                Ok(bytes)
            }
            Some(Reply::Raw(bytes)) => Ok(bytes.clone()),
            Some(Reply::Error(error)) => Err(error.clone()),
            None => panic!("no scripted reply for {} asked about '{}'", server, qname),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "mock"
    }
}

/// Wire response assembled from high-level parts. Ids default to zero;
/// `MockTransport` patches them to match the query.
pub struct ResponseTemplate {
    question: Option<Question>,
    answers: Vec<Vec<u8>>,
    nameservers: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
    rcode: u8,
}

impl ResponseTemplate {
    pub fn new() -> Self {
        Self {
            question: None,
            answers: Vec::new(),
            nameservers: Vec::new(),
            additional: Vec::new(),
            rcode: 0,
        }
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.question = Some(Question::new(name, record_type));
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn answer_a(mut self, name: &str, addr: &str) -> Self {
        let addr: std::net::Ipv4Addr = addr.parse().unwrap();
        self.answers.push(record(name, 1, 300, &addr.octets()));
        self
    }

    pub fn answer_aaaa(mut self, name: &str, addr: &str) -> Self {
        let addr: std::net::Ipv6Addr = addr.parse().unwrap();
        self.answers.push(record(name, 28, 300, &addr.octets()));
        self
    }

    pub fn answer_cname(mut self, name: &str, target: &str) -> Self {
        self.answers.push(record(name, 5, 300, &encode_name(target)));
        self
    }

    pub fn answer_opaque(mut self, name: &str, type_code: u16, rdata: &[u8]) -> Self {
        self.answers.push(record(name, type_code, 300, rdata));
        self
    }

    pub fn referral(mut self, zone: &str, host: &str) -> Self {
        self.nameservers
            .push(record(zone, 2, 172800, &encode_name(host)));
        self
    }

    pub fn glue(mut self, host: &str, addr: &str) -> Self {
        let addr: std::net::Ipv4Addr = addr.parse().unwrap();
        self.additional.push(record(host, 1, 172800, &addr.octets()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let header = Header {
            id: 0,
            flags: Header::FLAG_QR | self.rcode as u16,
            qdcount: self.question.is_some() as u16,
            ancount: self.answers.len() as u16,
            nscount: self.nameservers.len() as u16,
            arcount: self.additional.len() as u16,
        };

        let mut out = Vec::new();
        out.extend_from_slice(&MessageBuilder::encode_header(&header));
        if let Some(question) = &self.question {
            MessageBuilder::encode_question(question, &mut out).unwrap();
        }
        for section in [&self.answers, &self.nameservers, &self.additional] {
            for entry in section {
                out.extend_from_slice(entry);
            }
        }
        out
    }
}

impl Default for ResponseTemplate {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    MessageBuilder::encode_name(name, &mut out).unwrap();
    out
}

fn record(name: &str, type_code: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = encode_name(name);
    out.extend_from_slice(&type_code.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}
