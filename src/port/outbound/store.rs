//! Store port for order persistence.

use async_trait::async_trait;

use crate::domain::{Order, OrderId};
use crate::error::Result;

/// Document store holding captured orders.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`); one instance is
///   shared by every request for the life of the process
/// - `ensure_sharded` is expected to fail once the collection exists
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Produce a fresh identifier for an order about to be inserted.
    fn assign_id(&self) -> OrderId;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<()>;

    /// Create the order collection sharded on its hashed shard key.
    async fn ensure_sharded(&self) -> Result<()>;

    /// Insert the order as a new document.
    async fn insert(&self, order: &Order) -> Result<()>;
}
