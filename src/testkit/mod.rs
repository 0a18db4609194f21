//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - [`MemoryStore`](store::MemoryStore), an [`OrderStore`](crate::port::outbound::store::OrderStore)
//!   whose ping, sharding and inserts can be made to fail.
//! - [`queue`] - [`RecordingQueue`](queue::RecordingQueue), collects published messages.
//! - [`telemetry`] - [`RecordingSink`](telemetry::RecordingSink), collects telemetry items.
//! - [`partition`] - [`FixedPartitions`](partition::FixedPartitions), always picks the same partition.
//! - [`config`] - Canonical capture settings and environments.

pub mod config;
pub mod partition;
pub mod queue;
pub mod store;
pub mod telemetry;
