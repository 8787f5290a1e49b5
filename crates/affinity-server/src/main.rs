//! Regional Affinity Server - Main Entry Point
//!
//! Usage:
//!     affinity-server --port 8080
//!     affinity-server --address 127.0.0.1:8080 --log-level debug

use affinity_core::KERALA;
use affinity_server::config::DEFAULT_MAX_BODY_BYTES;
use affinity_server::ServerConfig;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "affinity-server")]
#[command(about = "Regional affinity verification service")]
#[command(version)]
struct Args {
    /// HTTP server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// HTTP server address (overrides port)
    #[arg(short, long)]
    address: Option<String>,

    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Maximum accepted request body in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: Server panicked");
        eprintln!(
            "  Location: {}",
            panic_info
                .location()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );
        eprintln!(
            "  Message: {}",
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .unwrap_or(&"<no message>")
        );
    }));

    let args = Args::parse();
    let config = ServerConfig::new(
        args.port,
        args.address.as_deref(),
        &args.log_level,
        args.max_body_bytes,
    )?;

    init_tracing(&config.log_level);

    info!("Initializing Regional Affinity Server");
    info!("  Version: {}", env!("CARGO_PKG_VERSION"));

    affinity_server::run(config, KERALA).await?;
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .init();
}
