use clap::Parser;
use rootwalk_domain::config::CliOverrides;
use rootwalk_domain::{DnsQuery, RecordType};
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Recursive DNS resolver that walks the delegation tree from the root")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// Record type to query for
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Root nameserver IP to start from
    #[arg(long)]
    root: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root.clone(),
        query_timeout_ms: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let services = di::Services::new(&config)?;

    let query = DnsQuery::new(cli.domain.as_str(), cli.record_type);
    let resolution = services.resolve_domain.execute(&query).await?;

    info!(
        domain = %query.domain,
        record_type = %resolution.record_type,
        server = %resolution.server,
        hops = resolution.hops,
        "Resolved"
    );
    println!("{}", resolution.data);

    Ok(())
}
