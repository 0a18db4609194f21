//! Queue settings.

use std::time::Duration;

use serde::Deserialize;

fn default_queue_name() -> String {
    "order".into()
}

const fn default_send_timeout_secs() -> u64 {
    5
}

const fn default_stream_partitions() -> u32 {
    3
}

/// Queue configuration shared by both AMQP dialects.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueConfig {
    /// Durable queue declared on the legacy broker.
    #[serde(default = "default_queue_name")]
    pub queue_name: String,
    /// Upper bound on a stream send (default: 5).
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
    /// Number of stream partitions messages are spread over (default: 3).
    #[serde(default = "default_stream_partitions")]
    pub stream_partitions: u32,
    /// Seed for partition selection; random per process when unset.
    #[serde(default)]
    pub partition_seed: Option<u64>,
}

impl QueueConfig {
    #[must_use]
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            queue_name: default_queue_name(),
            send_timeout_secs: default_send_timeout_secs(),
            stream_partitions: default_stream_partitions(),
            partition_seed: None,
        }
    }
}
