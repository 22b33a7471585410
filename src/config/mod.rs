use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Upstream translation endpoint settings
    pub upstream: UpstreamConfig,
    /// Advisory request pacing toward the upstream
    pub pacing: PacingConfig,
}

/// HTTP server listen address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address, e.g. "0.0.0.0" or "127.0.0.1"
    pub host: String,
    /// Listen port, default 8080
    pub port: u16,
}

/// Upstream translation service settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the translation endpoint (no query string)
    pub base_url: String,
    /// Per-request timeout, humantime format (e.g. "10s")
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

/// Pre-call delay window used to spread requests toward the upstream.
/// Advisory only: it reduces burstiness, it is not backpressure and has
/// no effect on correctness or ordering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PacingConfig {
    /// Disable to skip the delay entirely (useful in tests)
    pub enabled: bool,
    /// Lower bound of the uniform delay window
    #[serde(with = "humantime_serde")]
    pub min_delay: Duration,
    /// Upper bound of the uniform delay window
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
}

impl Config {
    /// Load configuration from a file, then overlay environment variables
    /// (prefix RELAY, separator __; e.g. RELAY__SERVER__PORT=8081).
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("RELAY").separator("__"))
            .build()
            .map_err(|e| crate::error::Error::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| crate::error::Error::Config(e.to_string()))
    }

    /// Built-in defaults: listen on 0.0.0.0:8080, Google translate endpoint,
    /// 10s upstream timeout, pacing enabled with a 100-500ms window.
    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            upstream: UpstreamConfig {
                base_url: "https://translate.googleapis.com/translate_a/single".to_string(),
                timeout: Duration::from_secs(10),
            },
            pacing: PacingConfig {
                enabled: true,
                min_delay: Duration::from_millis(100),
                max_delay: Duration::from_millis(500),
            },
        }
    }
}
