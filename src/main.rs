//! fargate-hello: application entry point.
//!
//! Initializes tracing, loads configuration from an optional TOML file,
//! applies CLI overrides, builds the axum router, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use fargate_hello::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use fargate_hello::http::start_server;
use fargate_hello::routes::create_router;

/// A minimal informational HTTP service for ECS Fargate deployment demos
#[derive(Parser, Debug)]
#[command(name = "fargate-hello", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Listening port (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "fargate_hello=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration; a missing file at the default path means defaults
    let mut config = AppConfig::load_or_default(&args.config)?;

    // CLI port override wins over the config file
    config.apply_overrides(args.port);

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let fmt_layer = if config.logging.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(fmt_layer)
        .init();

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();

    start_server(app, &config).await?;

    Ok(())
}
