//! Server configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults (the `PORT` environment variable, if set, replaces the default port)
//! 2. optional TOML file (`hashchain.toml`, or the path in `HASHCHAIN_CONFIG`)
//! 3. `HASHCHAIN_*` environment variables, e.g. `HASHCHAIN_PORT=9000`

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Port used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8333;

/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "hashchain.toml";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_address: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Payload of the genesis block created at startup.
    pub genesis_payload: i64,
    /// Log output format.
    pub log_format: LogFormat,
    /// Per-request timeout.
    pub request_timeout_seconds: u64,
}

impl ServerConfig {
    /// Load configuration from `path` plus defaults and environment.
    ///
    /// A missing file is not an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let default_port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Config::builder()
            .set_default("bind_address", "0.0.0.0")?
            .set_default("port", i64::from(default_port))?
            .set_default("genesis_payload", 0)?
            .set_default("log_format", "pretty")?
            .set_default("request_timeout_seconds", 10)?
            .add_source(File::with_name(&path.as_ref().to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("HASHCHAIN").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Load from the default location.
    ///
    /// The config file path can be overridden with `HASHCHAIN_CONFIG`.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("HASHCHAIN_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(path)
    }

    /// The socket address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|_| format!("invalid socket address: {}:{}", self.bind_address, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
