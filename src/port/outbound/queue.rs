//! Queue port for order notifications.

use async_trait::async_trait;

use crate::domain::OrderMessage;
use crate::error::Result;

/// Where a notification ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Queue name or link target address the message was sent to.
    pub destination: String,
}

impl Delivery {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

/// Transport delivering one message per captured order.
///
/// Delivery is at-most-once: implementations never retry.
#[async_trait]
pub trait OrderQueue: Send + Sync {
    /// Establish any long-lived connection the transport keeps.
    async fn connect(&self) -> Result<()>;

    /// Send the message and report its destination.
    async fn publish(&self, message: &OrderMessage) -> Result<Delivery>;
}
