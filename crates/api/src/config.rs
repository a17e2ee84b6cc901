//! Process configuration, read from environment variables.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FEATURED_COUNT: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as static assets (item images, stylesheets).
    pub assets_dir: PathBuf,
    /// Number of items sampled for the landing view.
    pub featured_count: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from("assets"),
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}

impl ApiConfig {
    /// `BIND_HOST`, `PORT`, `ASSETS_DIR`, `FEATURED_COUNT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get("BIND_HOST") {
            config.host = host.trim().to_string();
        }
        if let Some(port) = get("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                expected: "a TCP port number",
                value: port,
            })?;
        }
        if let Some(dir) = get("ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Some(count) = get("FEATURED_COUNT") {
            config.featured_count = count.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "FEATURED_COUNT",
                expected: "a non-negative integer",
                value: count,
            })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
