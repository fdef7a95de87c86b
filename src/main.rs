use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Use the library instead of redeclaring modules
use kata_server::{
    config::Config,
    web::{AppState, WebServer},
};

#[derive(Parser)]
#[command(name = "kata-server")]
#[command(version)]
#[command(about = "Small algorithmic exercises served as memoized HTTP endpoints")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Directory uploads are written to (overrides config file)
    #[arg(long, value_name = "DIR")]
    upload_dir: Option<PathBuf>,

    /// Entries kept per result cache (overrides config file)
    #[arg(long, value_name = "ENTRIES")]
    cache_capacity: Option<usize>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("kata_server={},tower_http=trace", cli.log_level)
    } else {
        format!("kata_server={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting kata server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from specified file
    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(upload_dir) = cli.upload_dir {
        config.storage.upload_path = upload_dir;
    }
    if let Some(capacity) = cli.cache_capacity {
        config.cache.capacity = capacity;
    }

    info!("Result cache capacity: {} entries", config.cache.capacity);

    let state = AppState::new(config)?;
    let web_server = WebServer::new(state).await?;

    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
