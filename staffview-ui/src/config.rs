//! Configuration resolution for staffview-ui
//!
//! Every setting resolves through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`STAFFVIEW_*`)
//! 3. TOML config file (`<config dir>/staffview/config.toml`)
//! 4. Compiled default

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use tracing::{debug, warn};

/// Default listen port for the dashboard backend
pub const DEFAULT_PORT: u16 = 5780;

/// Default record feed endpoint (dummyjson-compatible)
pub const DEFAULT_FEED_URL: &str = "https://dummyjson.com/users";

/// Default number of records requested from the feed
pub const DEFAULT_FEED_LIMIT: usize = 20;

/// Command-line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "staffview-ui", about = "StaffView dashboard backend service")]
pub struct CliArgs {
    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Record feed base URL
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Number of records to request from the feed
    #[arg(long)]
    pub feed_limit: Option<usize>,

    /// API shared secret (0 disables request authentication)
    #[arg(long)]
    pub shared_secret: Option<i64>,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub host: String,
    pub port: u16,
    pub feed_url: String,
    pub feed_limit: usize,
    pub shared_secret: i64,
}

impl UiConfig {
    /// Resolve configuration from CLI args, environment, and config file.
    pub fn resolve(cli: &CliArgs) -> UiConfig {
        let file = load_config_file().unwrap_or_default();

        UiConfig {
            host: cli
                .host
                .clone()
                .or_else(|| env_var("STAFFVIEW_HOST"))
                .or(file.host)
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            port: cli
                .port
                .or_else(|| env_var("STAFFVIEW_PORT"))
                .or(file.port)
                .unwrap_or(DEFAULT_PORT),
            feed_url: cli
                .feed_url
                .clone()
                .or_else(|| env_var("STAFFVIEW_FEED_URL"))
                .or(file.feed_url)
                .unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            feed_limit: cli
                .feed_limit
                .or_else(|| env_var("STAFFVIEW_FEED_LIMIT"))
                .or(file.feed_limit)
                .unwrap_or(DEFAULT_FEED_LIMIT),
            shared_secret: cli
                .shared_secret
                .or_else(|| env_var("STAFFVIEW_SHARED_SECRET"))
                .or(file.shared_secret)
                .unwrap_or(0),
        }
    }
}

/// File-backed configuration (all fields optional)
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    host: Option<String>,
    port: Option<u16>,
    feed_url: Option<String>,
    feed_limit: Option<usize>,
    shared_secret: Option<i64>,
}

fn load_config_file() -> Option<TomlConfig> {
    let path = config_file_path()?;
    if !path.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), %err, "could not read config file");
            return None;
        }
    };
    match toml::from_str(&content) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config file");
            Some(config)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring malformed config file");
            None
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("staffview").join("config.toml"))
}

fn env_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}
