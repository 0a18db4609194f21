//! In-memory order store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Order, OrderId};
use crate::error::{Error, Result};
use crate::port::outbound::store::OrderStore;

/// Order store backed by a vector, with switchable failures.
#[derive(Clone, Default)]
pub struct MemoryStore {
    orders: Arc<Mutex<Vec<Order>>>,
    next_id: Arc<AtomicU64>,
    fail_inserts: bool,
    fail_sharding: bool,
    unreachable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    #[must_use]
    pub fn failing_sharding(mut self) -> Self {
        self.fail_sharding = true;
        self
    }

    /// Store whose ping fails with a connection error.
    #[must_use]
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn inserted(&self) -> Vec<Order> {
        self.orders.lock().clone()
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    fn assign_id(&self) -> OrderId {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        OrderId::new(format!("{n:024x}"))
    }

    async fn ping(&self) -> Result<()> {
        if self.unreachable {
            return Err(Error::Connection("no reachable servers".into()));
        }
        Ok(())
    }

    async fn ensure_sharded(&self) -> Result<()> {
        if self.fail_sharding {
            return Err(Error::Database("sharding already enabled".into()));
        }
        Ok(())
    }

    async fn insert(&self, order: &Order) -> Result<()> {
        if self.fail_inserts {
            return Err(Error::Database("write refused".into()));
        }
        self.orders.lock().push(order.clone());
        Ok(())
    }
}
