//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod partition;
pub mod queue;
pub mod store;
pub mod telemetry;
