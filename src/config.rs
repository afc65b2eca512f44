//! Process-start configuration loaded from environment variables.
//!
//! The payloads served by the API take no configuration; only where and how
//! the process listens and logs is configurable.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Accepted values for `LOG_FORMAT`.
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Expose Prometheus metrics on `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    // === Logging ===
    /// Log filter directive (trace, debug, info, warn, error, or per-target).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format: `text` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_enabled: default_true(),
            rust_log: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.rust_log.trim().is_empty() {
            return Err(ServiceError::InvalidConfig(
                "RUST_LOG must not be empty".to_string(),
            ));
        }

        if !LOG_FORMATS.contains(&self.log_format_lower().as_str()) {
            return Err(ServiceError::InvalidConfig(format!(
                "LOG_FORMAT must be one of {:?}, got {:?}",
                LOG_FORMATS, self.log_format
            )));
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Get the effective log format (lowercase).
    pub fn log_format_lower(&self) -> String {
        self.log_format.to_lowercase()
    }

    /// Check if JSON log output is requested.
    pub fn is_json_logging(&self) -> bool {
        self.log_format_lower() == "json"
    }
}
