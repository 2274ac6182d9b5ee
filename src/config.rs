//! Configuration for the development server

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Production API host that `/api/*` requests are forwarded to
pub const UPSTREAM_BASE_URL: &str = "https://production-portal.highrisegame.com";

/// Total timeout for a proxied upstream request, in seconds
pub const PROXY_TIMEOUT_SECS: u64 = 30;

/// Server configuration, fixed at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub web_root: PathBuf,
    pub upstream_base: String,
}

impl Config {
    /// Create a new configuration from command-line arguments
    pub fn new<P: AsRef<Path>>(port: u16, web_root: P) -> Result<Self> {
        let web_root = web_root
            .as_ref()
            .canonicalize()
            .with_context(|| format!("Web root not found: {:?}", web_root.as_ref()))?;

        if !web_root.is_dir() {
            anyhow::bail!("Web root is not a directory: {:?}", web_root);
        }

        Ok(Config {
            port,
            web_root,
            upstream_base: UPSTREAM_BASE_URL.to_string(),
        })
    }
}
