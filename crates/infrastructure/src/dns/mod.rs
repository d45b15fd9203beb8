pub mod resolver;
pub mod transport;
pub mod wire;

pub use resolver::RecursiveResolver;
pub use transport::{DnsTransport, UdpTransport};
pub use wire::{MessageBuilder, ResponseParser};
