use clap::Parser;
use relaydns_api::AppState;
use relaydns_domain::CliOverrides;
use relaydns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "relaydns")]
#[command(version)]
#[command(about = "relaydns - caching DNS forwarder with a live admin page")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UDP port to answer DNS queries on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Upstream resolver (host:port, port defaults to 53)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Admin web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address for both listeners
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Cache backend name
    #[arg(long)]
    cache: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        upstream: cli.upstream.clone(),
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        cache: cli.cache.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting relaydns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config).await?;

    let app_state = AppState::new(dns_services.cache.clone(), dns_services.upstream.server());

    let dns_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.port).parse()?;
    let dns_handler = DnsServerHandler::new(dns_services.resolve_query.clone());

    let udp_socket = server::bind_udp_socket(dns_addr)?;
    let max_inflight = config.server.max_inflight;
    tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(udp_socket, dns_handler, max_inflight).await {
            error!(error = %e, "DNS server error");
        }
    });

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
