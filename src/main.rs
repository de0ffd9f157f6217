//! devsecops-demo: greeting and health endpoints behind an OIDC-enabled ALB.
//!
//! This is the application entry point. It initializes tracing, loads configuration
//! from a TOML file, sets up the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devsecops_demo::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use devsecops_demo::{create_router, http::start_server, AppState};

/// Greeting and health endpoints for the DevSecOps demo platform
#[derive(Parser, Debug)]
#[command(name = "devsecops-demo", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml, if present]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "devsecops_demo=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing so the log format is known
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let log_format = config.logging.log_format();
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match log_format {
        Some(LogFormat::Json) => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    if log_format.is_none() {
        tracing::warn!(
            format = %config.logging.format,
            "Unknown logging.format, falling back to text"
        );
    }

    tracing::info!(
        config = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH),
        host = %config.http.host,
        port = config.http.port,
        api_docs = config.api_docs.enabled,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
