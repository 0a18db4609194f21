//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points the capture service talks to. Adapters
//! in [`crate::adapter`] implement them for MongoDB, AMQP brokers and
//! Application Insights; [`crate::testkit`] implements them in memory.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      OrderCapture       │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │  Store  │            │    Queue    │              │ Telemetry │
//! │ Adapter │            │   Adapter   │              │   Sink    │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```

pub mod outbound;
