//! Outbound adapters: implementations of the driven ports.

pub mod amqp;
pub mod appinsights;
pub mod mongo;
pub mod partition;
