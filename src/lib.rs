//! Captureorder - order capture into a document store with AMQP notifications.
//!
//! Each order is stored in MongoDB or CosmosDB (MongoDB API) and announced on
//! a queue: RabbitMQ over AMQP 0.9.1 or Azure Event Hubs over AMQP 1.0. Which
//! backends are used follows from the connection URLs in the environment.
//! Operational telemetry goes to Application Insights.
//!
//! # Architecture
//!
//! The crate is laid out as ports and adapters:
//!
//! - [`domain`] - Orders, notification messages and backend kinds
//! - [`port`] - Traits the application drives: store, queue, telemetry, partitions
//! - [`adapter`] - MongoDB, RabbitMQ, Event Hubs and Application Insights
//!   implementations, plus the command-line surface
//! - [`application`] - The [`OrderCapture`](application::OrderCapture) workflow
//! - [`infrastructure`] - Configuration and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use captureorder::domain::Order;
//! use captureorder::infrastructure::bootstrap;
//! use captureorder::infrastructure::config::Config;
//!
//! # async fn run() -> captureorder::error::Result<()> {
//! let config = Config::from_env();
//! let capture = bootstrap::start_capture(&config).await?;
//! let order = capture.persist(Order::new("someone@example.com")).await;
//! capture.publish(&order).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
