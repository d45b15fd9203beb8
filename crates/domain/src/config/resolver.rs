use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root nameserver every resolution starts from. A single entry
    /// point, no fallback to the other root letters.
    #[serde(default = "default_root_server")]
    pub root_server: String,

    #[serde(default = "default_dns_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,

    /// Upper bound on nameserver round trips per resolution, shared
    /// with any nested nameserver-address lookups.
    #[serde(default = "default_max_hops")]
    pub max_hops: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_dns_port(),
            query_timeout_ms: default_query_timeout(),
            max_hops: default_max_hops(),
        }
    }
}

fn default_root_server() -> String {
    // a.root-servers.net
    "198.41.0.4".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    3000
}

fn default_max_hops() -> u32 {
    30
}
