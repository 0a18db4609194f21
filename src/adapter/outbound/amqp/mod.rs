//! AMQP order publishers.
//!
//! Exactly one is active per process, chosen by [`QueueKind`](crate::domain::QueueKind):
//! [`RabbitPublisher`] speaks AMQP 0.9.1, [`EventHubPublisher`] AMQP 1.0.

pub mod eventhub;
pub mod rabbitmq;

pub use eventhub::EventHubPublisher;
pub use rabbitmq::RabbitPublisher;
