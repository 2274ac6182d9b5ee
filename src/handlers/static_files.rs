//! Static file responder for the web root

use axum::{body::Body, extract::Request, response::Response};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::config::Config;

/// Serve a file from the web root. `ServeDir` resolves `index.html` for
/// directories, infers content types, returns 404 for missing paths, and
/// rejects paths that would escape the root.
pub async fn serve_static(config: &Arc<Config>, request: Request) -> Response {
    match ServeDir::new(&config.web_root).oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(infallible) => match infallible {},
    }
}
