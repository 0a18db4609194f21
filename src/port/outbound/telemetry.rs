//! Telemetry port for operational signals.
//!
//! This module defines the items reported to an observability backend and
//! the trait sinks implement to receive them.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Items that can be sent to a telemetry sink.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryItem {
    /// A failure worth surfacing on the dashboard.
    Exception(ExceptionRecord),
    /// An outbound call to a store or queue.
    Dependency(Dependency),
    /// A named business event.
    Event {
        /// The event name as shown on the dashboard.
        name: String,
    },
}

/// Exception details.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionRecord {
    /// Short error type name.
    pub type_name: String,
    /// Rendered error message.
    pub message: String,
}

impl ExceptionRecord {
    #[must_use]
    pub fn from_error(error: &crate::error::Error) -> Self {
        Self {
            type_name: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// Record of one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    /// Name of the dependency (e.g. "CosmosDB", "RabbitMQ").
    pub name: String,
    /// Dependency type (e.g. "MongoDB", "AMQP").
    pub kind: String,
    /// Connection string of the target.
    pub target: String,
    /// Whether the call succeeded.
    pub success: bool,
    /// What the call did (e.g. "Insert order").
    pub operation: String,
    /// When the call started.
    pub started_at: DateTime<Utc>,
    /// When the call finished.
    pub finished_at: DateTime<Utc>,
}

impl Dependency {
    /// Time spent in the call; zero if the clock went backwards.
    #[must_use]
    pub fn duration(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}

/// Trait for telemetry backends.
///
/// Tracking is fire-and-forget: implementations must return quickly and
/// must never report their own failures to the caller. For slow operations
/// (e.g. HTTP calls) implementations should spawn an async task and wait
/// for it in [`flush`](TelemetrySink::flush).
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    /// Handle a telemetry item.
    fn track(&self, item: TelemetryItem);

    /// Wait for items still being delivered. Sinks that deliver inline
    /// have nothing to wait for.
    async fn flush(&self) {}
}

/// A no-op sink for when telemetry is disabled.
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn track(&self, _item: TelemetryItem) {}
}

/// A sink that logs items via tracing.
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn track(&self, item: TelemetryItem) {
        use tracing::debug;
        match item {
            TelemetryItem::Exception(e) => {
                debug!(kind = %e.type_name, message = %e.message, "Telemetry exception");
            }
            TelemetryItem::Dependency(d) => {
                debug!(
                    name = %d.name,
                    kind = %d.kind,
                    success = d.success,
                    operation = %d.operation,
                    duration_ms = d.duration().as_millis() as u64,
                    "Telemetry dependency"
                );
            }
            TelemetryItem::Event { name } => {
                debug!(name = %name, "Telemetry event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dependency(started_ms: i64, finished_ms: i64) -> Dependency {
        Dependency {
            name: "MongoDB".into(),
            kind: "MongoDB".into(),
            target: "mongodb://localhost".into(),
            success: true,
            operation: "Insert order".into(),
            started_at: Utc.timestamp_millis_opt(started_ms).unwrap(),
            finished_at: Utc.timestamp_millis_opt(finished_ms).unwrap(),
        }
    }

    #[test]
    fn dependency_duration_is_elapsed_time() {
        assert_eq!(
            dependency(1_000, 1_250).duration(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn dependency_duration_saturates_at_zero() {
        assert_eq!(dependency(2_000, 1_000).duration(), Duration::ZERO);
    }

    #[test]
    fn exception_record_uses_error_kind() {
        let record = ExceptionRecord::from_error(&crate::error::Error::Database("down".into()));
        assert_eq!(record.type_name, "DatabaseError");
        assert_eq!(record.message, "database error: down");
    }

    #[test]
    fn null_and_log_sinks_accept_items() {
        NullSink.track(TelemetryItem::Event { name: "x".into() });
        LogSink.track(TelemetryItem::Dependency(dependency(0, 5)));
    }
}
