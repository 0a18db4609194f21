//! Telemetry settings.

use std::time::Duration;

use serde::Deserialize;

fn default_endpoint() -> String {
    "https://dc.services.visualstudio.com/v2/track".into()
}

const fn default_flush_timeout_secs() -> u64 {
    5
}

/// Application Insights ingestion configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Ingestion endpoint envelopes are posted to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// How long the binary waits for pending telemetry before exiting (default: 5).
    #[serde(default = "default_flush_timeout_secs")]
    pub flush_timeout_secs: u64,
}

impl TelemetryConfig {
    #[must_use]
    pub fn flush_timeout(&self) -> Duration {
        Duration::from_secs(self.flush_timeout_secs)
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            flush_timeout_secs: default_flush_timeout_secs(),
        }
    }
}
