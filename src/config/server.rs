//! HTTP server configuration loading from config.toml
//!
//! The `[server]` table of `config.toml` sets the bind address. The file is optional;
//! `AGRIX_HOST` and `AGRIX_PORT` environment variables override whatever it contains.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Bind address settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Address the HTTP server listens on
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0", "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Applies `AGRIX_HOST` / `AGRIX_PORT` style overrides.
    ///
    /// # Errors
    /// Returns an error if the port override is not a valid `u16`.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(host) = host {
            self.host = host;
        }

        if let Some(port) = port {
            self.port = port.trim().parse().map_err(|e| Error::Config {
                message: format!("Invalid port {port:?}: {e}"),
            })?;
        }

        Ok(self)
    }
}

/// Loads configuration from a TOML file, falling back to defaults when it does not exist.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the server configuration from ./config.toml plus environment overrides.
///
/// # Errors
/// Returns an error if the file is malformed or `AGRIX_PORT` is not a valid port.
pub fn load_default_config() -> Result<ServerConfig> {
    load_config("config.toml")?
        .server
        .with_overrides(std::env::var("AGRIX_HOST").ok(), std::env::var("AGRIX_PORT").ok())
}
