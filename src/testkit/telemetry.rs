//! Telemetry sink that records everything it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::port::outbound::telemetry::{
    Dependency, ExceptionRecord, TelemetryItem, TelemetrySink,
};

/// Thread-safe telemetry collector for assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingSink {
    items: Arc<Mutex<Vec<TelemetryItem>>>,
    flushes: Arc<AtomicUsize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the sink was flushed.
    pub fn flushes(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    pub fn items(&self) -> Vec<TelemetryItem> {
        self.items.lock().clone()
    }

    /// Names of recorded events, in order.
    pub fn events(&self) -> Vec<String> {
        self.items
            .lock()
            .iter()
            .filter_map(|item| match item {
                TelemetryItem::Event { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn exceptions(&self) -> Vec<ExceptionRecord> {
        self.items
            .lock()
            .iter()
            .filter_map(|item| match item {
                TelemetryItem::Exception(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.items
            .lock()
            .iter()
            .filter_map(|item| match item {
                TelemetryItem::Dependency(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl TelemetrySink for RecordingSink {
    fn track(&self, item: TelemetryItem) {
        self.items.lock().push(item);
    }

    async fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }
}
