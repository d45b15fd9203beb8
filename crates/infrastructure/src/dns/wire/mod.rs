//! DNS wire format codec (RFC 1035 §4).
//!
//! `MessageBuilder` produces query bytes, `ResponseParser` decodes a
//! full response message. Compression pointers are consumed on decode
//! but never produced; queries built here are always short.

pub mod cursor;
pub mod message_builder;
pub mod response_parser;

pub use cursor::Cursor;
pub use message_builder::MessageBuilder;
pub use response_parser::ResponseParser;

/// Upper bound on label length; larger values collide with the
/// compression bit pattern.
pub const MAX_LABEL_LEN: usize = 63;

/// Upper bound on the encoded length of a full name.
pub const MAX_NAME_LEN: usize = 255;

/// Bound on pointer chases while decoding one name. Real messages use
/// a handful; anything deeper is a crafted loop.
pub const MAX_POINTER_JUMPS: usize = 128;

/// Top two bits set in a length octet mark a compression pointer.
pub const COMPRESSION_MASK: u8 = 0b1100_0000;
