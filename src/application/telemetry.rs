//! Telemetry emitter shared by the capture workflow.
//!
//! Two independent sinks are kept: the challenge sink, which only receives
//! business events, and the team's own sink, which receives exceptions and
//! dependency records when the team configured one.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::error::Error;
use crate::port::outbound::telemetry::{
    Dependency, ExceptionRecord, NullSink, TelemetryItem, TelemetrySink,
};

/// Routes telemetry items to the challenge and custom sinks.
#[derive(Clone)]
pub struct Telemetry {
    challenge: Arc<dyn TelemetrySink>,
    custom: Option<Arc<dyn TelemetrySink>>,
}

impl Telemetry {
    pub fn new(challenge: Arc<dyn TelemetrySink>, custom: Option<Arc<dyn TelemetrySink>>) -> Self {
        Self { challenge, custom }
    }

    /// Emitter that drops everything.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Arc::new(NullSink), None)
    }

    /// True when the team configured its own sink.
    #[must_use]
    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    pub fn track_exception(&self, error: &Error) {
        if let Some(custom) = &self.custom {
            custom.track(TelemetryItem::Exception(ExceptionRecord::from_error(error)));
        }
    }

    pub fn track_dependency(&self, dependency: Dependency) {
        if let Some(custom) = &self.custom {
            custom.track(TelemetryItem::Dependency(dependency));
        }
    }

    pub fn track_event(&self, name: impl Into<String>) {
        self.challenge
            .track(TelemetryItem::Event { name: name.into() });
    }

    /// Wait up to `timeout` for both sinks to deliver what they were given.
    ///
    /// Items still in flight when the timeout expires are abandoned.
    pub async fn flush(&self, timeout: Duration) {
        let flushed = async {
            self.challenge.flush().await;
            if let Some(custom) = &self.custom {
                custom.flush().await;
            }
        };
        if tokio::time::timeout(timeout, flushed).await.is_err() {
            warn!(timeout_secs = timeout.as_secs(), "Telemetry flush timed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::telemetry::RecordingSink;
    use chrono::Utc;

    fn dependency() -> Dependency {
        Dependency {
            name: "MongoDB".into(),
            kind: "MongoDB".into(),
            target: "mongodb://mongo".into(),
            success: true,
            operation: "Insert order".into(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn events_go_to_challenge_sink_only() {
        let challenge = RecordingSink::new();
        let custom = RecordingSink::new();
        let telemetry = Telemetry::new(Arc::new(challenge.clone()), Some(Arc::new(custom.clone())));

        telemetry.track_event("captured");

        assert_eq!(challenge.events(), vec!["captured".to_string()]);
        assert!(custom.items().is_empty());
    }

    #[test]
    fn exceptions_and_dependencies_go_to_custom_sink_only() {
        let challenge = RecordingSink::new();
        let custom = RecordingSink::new();
        let telemetry = Telemetry::new(Arc::new(challenge.clone()), Some(Arc::new(custom.clone())));

        telemetry.track_exception(&Error::Queue("closed".into()));
        telemetry.track_dependency(dependency());

        assert!(challenge.items().is_empty());
        assert_eq!(custom.exceptions().len(), 1);
        assert_eq!(custom.dependencies().len(), 1);
    }

    struct StalledSink;

    #[async_trait::async_trait]
    impl TelemetrySink for StalledSink {
        fn track(&self, _item: TelemetryItem) {}

        async fn flush(&self) {
            std::future::pending::<()>().await;
        }
    }

    #[tokio::test]
    async fn flush_waits_for_both_sinks() {
        let challenge = RecordingSink::new();
        let custom = RecordingSink::new();
        let telemetry = Telemetry::new(Arc::new(challenge.clone()), Some(Arc::new(custom.clone())));

        telemetry.track_event("captured");
        telemetry.flush(Duration::from_secs(1)).await;

        assert_eq!(challenge.flushes(), 1);
        assert_eq!(custom.flushes(), 1);
    }

    #[tokio::test]
    async fn flush_gives_up_after_timeout() {
        let telemetry = Telemetry::new(Arc::new(StalledSink), None);

        let started = std::time::Instant::now();
        telemetry.flush(Duration::from_millis(50)).await;

        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn without_custom_sink_exceptions_are_dropped() {
        let challenge = RecordingSink::new();
        let telemetry = Telemetry::new(Arc::new(challenge.clone()), None);

        telemetry.track_exception(&Error::Queue("closed".into()));
        telemetry.track_dependency(dependency());

        assert!(!telemetry.has_custom());
        assert!(challenge.items().is_empty());
    }
}
