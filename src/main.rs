//! Hearth: a minimal static home page service.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, loads the Tera templates, sets up the Axum
//! router, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hearth::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use hearth::http::start_server;
use hearth::routes::create_router;
use hearth::state::AppState;
use hearth::templates::init_templates;

/// Hearth: a minimal static home page service
#[derive(Parser, Debug)]
#[command(name = "hearth", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "hearth=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; a missing file means compiled-in defaults
    let config = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(config = %args.config, "Loaded configuration");

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Create application state and router
    let state = AppState::new(tera);
    let app = create_router(state);

    // Start server (blocks until shutdown)
    start_server(app, &config).await?;

    Ok(())
}
