//! hello-routes
//!
//! A minimal HTTP demo server built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ listener ──▶ middleware ──▶ dispatcher ──▶ route table
//!                                 (request id,                    │
//!                                  trace, timeout,                ▼
//!                                  body limit)                 handler
//!     Client Response                                             │
//!     ◀───────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one variant (`plain`, `echo` or `greeting`) is served per process.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use hello_routes::http::HttpServer;
use hello_routes::lifecycle::{resolve_config, Overrides, Shutdown};
use hello_routes::observability::logging;
use hello_routes::routing::Variant;

#[derive(Parser)]
#[command(name = "hello-routes", version)]
#[command(about = "Minimal HTTP demo server", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:4567.
    #[arg(short, long)]
    bind: Option<String>,

    /// Route profile to serve.
    #[arg(long, value_enum)]
    variant: Option<Variant>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = Overrides {
        bind_address: cli.bind,
        variant: cli.variant,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    logging::init(&config.observability);

    tracing::info!("hello-routes v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        variant = %config.app.variant,
        max_body_bytes = config.app.max_body_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
