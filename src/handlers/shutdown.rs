//! Programmatic shutdown endpoint for IDE integration

use axum::http::StatusCode;
use std::time::Duration;
use tracing::info;

/// `POST /shutdown`: acknowledge with 200, then terminate the process once
/// the response has been flushed. In-flight requests are not waited for and
/// no cleanup runs.
pub async fn shutdown_handler() -> StatusCode {
    info!("Shutdown requested, exiting");

    tokio::spawn(async {
        // Give hyper a moment to write the response to the socket
        tokio::time::sleep(Duration::from_millis(100)).await;
        std::process::exit(0);
    });

    StatusCode::OK
}
