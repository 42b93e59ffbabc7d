//! Shell configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of a real auth backend. When unset the simulated gateway
    /// is used.
    pub api_url: Option<String>,
    /// Latency applied by the simulated gateway.
    pub simulated_latency: Duration,
    /// Enable JSON logging (for log shipping).
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("SKILLMAP_API_URL").ok(),
            simulated_latency: Duration::from_millis(
                env::var("SKILLMAP_SIM_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(250),
            ),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
