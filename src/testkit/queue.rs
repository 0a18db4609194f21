//! In-memory order queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::OrderMessage;
use crate::error::{Error, Result};
use crate::port::outbound::queue::{Delivery, OrderQueue};

/// Destination reported unless overridden with [`RecordingQueue::with_destination`].
pub const DESTINATION: &str = "order";

/// Queue that records published messages, or rejects everything.
#[derive(Clone)]
pub struct RecordingQueue {
    sent: Arc<Mutex<Vec<OrderMessage>>>,
    connected: Arc<AtomicBool>,
    destination: String,
    failing: bool,
}

impl Default for RecordingQueue {
    fn default() -> Self {
        Self {
            sent: Arc::default(),
            connected: Arc::default(),
            destination: DESTINATION.to_string(),
            failing: false,
        }
    }
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `destination` for every message, e.g. a stream partition address.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Queue whose connect and publish both fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn sent(&self) -> Vec<OrderMessage> {
        self.sent.lock().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderQueue for RecordingQueue {
    async fn connect(&self) -> Result<()> {
        if self.failing {
            return Err(Error::Connection("queue unreachable".into()));
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn publish(&self, message: &OrderMessage) -> Result<Delivery> {
        if self.failing {
            return Err(Error::Queue("channel closed".into()));
        }
        self.sent.lock().push(message.clone());
        Ok(Delivery::new(self.destination.clone()))
    }
}
