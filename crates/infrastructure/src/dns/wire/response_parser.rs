//! DNS response decoding (RFC 1035 §4.1).
//!
//! Names may use compression pointers (§4.1.4): a two-byte field whose
//! top two bits are set, carrying a 14-bit absolute offset into the
//! same message. Pointers must target an offset strictly below their
//! own position and chains are capped, so crafted messages cannot loop
//! the decoder or read out of bounds.

use super::cursor::Cursor;
use super::{COMPRESSION_MASK, MAX_NAME_LEN, MAX_POINTER_JUMPS};
use rootwalk_domain::{
    DomainError, Header, Message, Question, RData, RecordClass, RecordType, ResourceRecord,
};
use std::net::{Ipv4Addr, Ipv6Addr};

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a complete response message. Section lengths follow the
    /// header counts exactly; trailing bytes beyond them are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Message, DomainError> {
        let mut cursor = Cursor::new(bytes);

        let header = Self::decode_header(&mut cursor)?;

        let mut questions = Vec::new();
        for _ in 0..header.qdcount {
            questions.push(Self::decode_question(&mut cursor)?);
        }
        let mut answers = Vec::new();
        for _ in 0..header.ancount {
            answers.push(Self::decode_record(&mut cursor)?);
        }
        let mut nameservers = Vec::new();
        for _ in 0..header.nscount {
            nameservers.push(Self::decode_record(&mut cursor)?);
        }
        let mut additional = Vec::new();
        for _ in 0..header.arcount {
            additional.push(Self::decode_record(&mut cursor)?);
        }

        Ok(Message {
            header,
            questions,
            answers,
            nameservers,
            additional,
        })
    }

    pub fn decode_header(cursor: &mut Cursor<'_>) -> Result<Header, DomainError> {
        Ok(Header {
            id: cursor.read_u16("header id")?,
            flags: cursor.read_u16("header flags")?,
            qdcount: cursor.read_u16("header qdcount")?,
            ancount: cursor.read_u16("header ancount")?,
            nscount: cursor.read_u16("header nscount")?,
            arcount: cursor.read_u16("header arcount")?,
        })
    }

    pub fn decode_question(cursor: &mut Cursor<'_>) -> Result<Question, DomainError> {
        let name = Self::read_name(cursor)?;
        let type_code = cursor.read_u16("question type")?;
        let record_type = RecordType::from_u16(type_code)
            .ok_or(DomainError::UnknownQuestionType(type_code))?;
        let class_code = cursor.read_u16("question class")?;
        let class = RecordClass::from_u16(class_code)
            .ok_or(DomainError::UnknownRecordClass(class_code))?;
        Ok(Question {
            name,
            record_type,
            class,
        })
    }

    pub fn decode_record(cursor: &mut Cursor<'_>) -> Result<ResourceRecord, DomainError> {
        let name = Self::read_name(cursor)?;
        let type_code = cursor.read_u16("record type")?;
        let record_type = RecordType::from_u16_lossy(type_code);
        let class_code = cursor.read_u16("record class")?;
        let class = RecordClass::from_u16(class_code)
            .ok_or(DomainError::UnknownRecordClass(class_code))?;
        let ttl = cursor.read_u32("record ttl")?;
        let rdlength = cursor.read_u16("record rdlength")?;

        let rdata = match record_type {
            RecordType::A => {
                if rdlength != 4 {
                    return Err(DomainError::InvalidRdataLength {
                        record_type,
                        expected: 4,
                        actual: rdlength as usize,
                    });
                }
                let bytes = cursor.read_bytes(4, "A rdata")?;
                RData::A(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]))
            }
            RecordType::AAAA => {
                if rdlength != 16 {
                    return Err(DomainError::InvalidRdataLength {
                        record_type,
                        expected: 16,
                        actual: rdlength as usize,
                    });
                }
                let bytes = cursor.read_bytes(16, "AAAA rdata")?;
                let mut octets = [0u8; 16];
                octets.copy_from_slice(bytes);
                RData::Aaaa(Ipv6Addr::from(octets))
            }
            // Rdata for name-typed records is itself a possibly
            // compressed name; rdlength is not a usable boundary here.
            RecordType::NS => RData::Ns(Self::read_name(cursor)?),
            RecordType::CNAME => RData::Cname(Self::read_name(cursor)?),
            // Everything else: keep the raw bytes and advance by
            // exactly rdlength so later records still parse.
            _ => RData::Opaque(cursor.read_bytes(rdlength as usize, "rdata")?.to_vec()),
        };

        Ok(ResourceRecord {
            name,
            record_type,
            class,
            ttl,
            rdlength,
            rdata,
        })
    }

    /// Decode one name, following compression pointers.
    ///
    /// `cursor` ends up immediately after the name as it appeared in
    /// the enclosing structure: past the terminating zero octet, or
    /// past the two pointer bytes. A pointer always terminates the
    /// inline part of a name.
    pub fn read_name(cursor: &mut Cursor<'_>) -> Result<String, DomainError> {
        let mut labels: Vec<String> = Vec::new();
        let mut encoded_len = 0usize;
        let mut jumps = 0usize;
        let mut detached: Option<Cursor<'_>> = None;

        loop {
            let cur = detached.as_mut().unwrap_or(&mut *cursor);
            let at = cur.pos();
            let len = cur.read_u8("name length")?;

            if len == 0 {
                break;
            }

            if len & COMPRESSION_MASK == COMPRESSION_MASK {
                let low = cur.read_u8("pointer low byte")?;
                let target = (((len & !COMPRESSION_MASK) as usize) << 8) | low as usize;
                if target >= cur.len() {
                    return Err(DomainError::PointerOutOfBounds {
                        target,
                        len: cur.len(),
                    });
                }
                // Strictly backward targets make every chain finite;
                // the jump cap is a second line against crafted input.
                if target >= at {
                    return Err(DomainError::PointerNotBackward { at, target });
                }
                jumps += 1;
                if jumps > MAX_POINTER_JUMPS {
                    return Err(DomainError::PointerChainTooDeep(MAX_POINTER_JUMPS));
                }
                let next = cur.jump(target);
                detached = Some(next);
                continue;
            }

            if len & COMPRESSION_MASK != 0 {
                return Err(DomainError::ReservedLabelBits(len));
            }

            let bytes = cur.read_bytes(len as usize, "label")?;
            encoded_len += len as usize + 1;
            if encoded_len + 1 > MAX_NAME_LEN {
                return Err(DomainError::NameTooLong);
            }
            labels.push(String::from_utf8_lossy(bytes).into_owned());
        }

        Ok(labels.join("."))
    }
}
