// Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub mod bind;

#[cfg(test)]
mod bind_test;

pub use bind::{bind_client_config, BindError, CLIENT_PARAM_PREFIX};

/// Per-endpoint HTTP client tuning, bound from `httpClient.`-prefixed
/// endpoint parameters. Every field is optional; `None` means the
/// underlying client default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Socket read timeout (`soTimeout`, milliseconds).
    pub so_timeout: Option<Duration>,
    /// Timeout for establishing a connection (`connectionTimeout`, milliseconds).
    pub connection_timeout: Option<Duration>,
    /// Socket send/receive buffer size (`bufferSize`, bytes).
    pub buffer_size: Option<usize>,
    /// Max attempts for idempotent requests (`maxRetries`).
    pub max_retries: Option<u32>,
    /// TCP_NODELAY toggle (`tcpNoDelay`).
    pub tcp_no_delay: Option<bool>,
    /// Stale connection checking toggle (`staleCheckingEnabled`).
    pub stale_check: Option<bool>,
}

/// Shared connection pool tuning. Applied once, when the pool is built;
/// endpoints created from the pool all observe the same limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PoolSettings {
    pub max_idle_per_host: usize,
    #[serde(with = "humantime_serde")]
    pub idle_timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub keep_alive: Duration,
    pub tcp_no_delay: bool,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_idle_per_host: 2048,
            idle_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(3),
            keep_alive: Duration::from_secs(30),
            tcp_no_delay: true,
        }
    }
}

/// Top-level factory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FactoryConfig {
    #[serde(default)]
    pub pool: PoolSettings,
}

impl FactoryConfig {
    /// Loads configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read config yaml file {:?}", path))?;

        let cfg: FactoryConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("unmarshal yaml from {:?}", path))?;

        Ok(cfg)
    }
}
