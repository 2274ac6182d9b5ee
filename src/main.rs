//! Development server for web builds
//! Serves static files from a web root, proxies `/api/*` calls to the
//! production API with permissive CORS headers, and exposes a shutdown
//! endpoint for IDE integration.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

mod config;
mod handlers;
mod proxy;
mod utils;

use config::Config;

/// Development server for web builds
#[derive(Parser, Debug)]
#[command(name = "web-dev-server")]
#[command(about = "Local static file server with API proxy for web builds", long_about = None)]
struct Args {
    /// Web root directory
    #[arg(default_value = ".")]
    webroot: String,

    /// Port to serve on
    #[arg(long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = Arc::new(Config::new(args.port, &args.webroot)?);

    // All relative paths resolve against the web root from here on
    std::env::set_current_dir(&config.web_root)
        .with_context(|| format!("Failed to change directory to {:?}", config.web_root))?;

    info!(
        "Serving {} at http://localhost:{}",
        config.web_root.display(),
        config.port
    );
    info!("API proxy: /api/* -> {}", config.upstream_base);

    // Build router
    let app = handlers::create_router(config.clone());

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    // Ctrl+C / SIGTERM stop the serve loop; programmatic stop goes through
    // POST /shutdown
    let shutdown_signal = async {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
