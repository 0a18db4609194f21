//! AMQP 0.9.1 publisher for RabbitMQ.
//!
//! Keeps one broker connection shared by every publish and dials a new one
//! when it has been lost. Each publish opens a channel, declares the durable
//! queue, sends one persistent message through the default exchange and
//! closes the channel. Messages are never resent.

use async_trait::async_trait;
use lapin::options::{BasicPublishOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::message::CONTENT_TYPE;
use crate::domain::OrderMessage;
use crate::error::{Error, Result};
use crate::infrastructure::config::queue::QueueConfig;
use crate::port::outbound::queue::{Delivery, OrderQueue};

/// AMQP delivery mode for messages that survive a broker restart.
const PERSISTENT: u8 = 2;

/// Default exchange; routes by queue name.
const DEFAULT_EXCHANGE: &str = "";

/// RabbitMQ-backed order queue.
pub struct RabbitPublisher {
    url: String,
    queue_name: String,
    connection: Mutex<Option<Connection>>,
}

impl RabbitPublisher {
    #[must_use]
    pub fn new(url: impl Into<String>, config: &QueueConfig) -> Self {
        Self {
            url: url.into(),
            queue_name: config.queue_name.clone(),
            connection: Mutex::new(None),
        }
    }

    /// Name of the durable queue orders are routed to.
    #[must_use]
    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    /// True while a connection is held and the broker has not closed it.
    pub async fn is_connected(&self) -> bool {
        self.connection
            .lock()
            .await
            .as_ref()
            .is_some_and(|c| c.status().connected())
    }

    async fn dial(&self) -> Result<Connection> {
        let connection = Connection::connect(&self.url, ConnectionProperties::default())
            .await
            .map_err(|e| Error::Connection(format!("creating client: {e}")))?;
        info!(url = %self.url, "Connected to RabbitMQ");
        Ok(connection)
    }

    /// Open a channel on the held connection, dialling again once when the
    /// connection is missing, closed or refuses the channel.
    async fn channel(&self) -> Result<Channel> {
        let mut held = self.connection.lock().await;

        if let Some(connection) = held.as_ref() {
            if connection.status().connected() {
                match connection.create_channel().await {
                    Ok(channel) => return Ok(channel),
                    Err(e) => warn!(error = %e, "RabbitMQ connection refused a channel, reconnecting"),
                }
            } else {
                warn!(url = %self.url, "RabbitMQ connection lost, reconnecting");
            }
            *held = None;
        }

        let connection = self.dial().await?;
        let channel = connection
            .create_channel()
            .await
            .map_err(|e| Error::Queue(format!("creating channel: {e}")))?;
        *held = Some(connection);
        Ok(channel)
    }

    async fn send(&self, channel: &Channel, message: &OrderMessage) -> Result<String> {
        let queue = channel
            .queue_declare(
                &self.queue_name,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|e| Error::Queue(format!("declaring queue: {e}")))?;

        let routing_key = queue.name().as_str().to_string();
        channel
            .basic_publish(
                DEFAULT_EXCHANGE,
                &routing_key,
                BasicPublishOptions::default(),
                message.body().as_bytes(),
                message_properties(),
            )
            .await
            .map_err(|e| Error::Queue(format!("sending message: {e}")))?;

        Ok(routing_key)
    }
}

fn message_properties() -> BasicProperties {
    BasicProperties::default()
        .with_delivery_mode(PERSISTENT)
        .with_content_type(CONTENT_TYPE.into())
}

#[async_trait]
impl OrderQueue for RabbitPublisher {
    async fn connect(&self) -> Result<()> {
        let mut held = self.connection.lock().await;
        if !held.as_ref().is_some_and(|c| c.status().connected()) {
            *held = Some(self.dial().await?);
        }
        Ok(())
    }

    async fn publish(&self, message: &OrderMessage) -> Result<Delivery> {
        let channel = self.channel().await?;

        let result = self.send(&channel, message).await;

        if let Err(e) = channel.close(200, "OK").await {
            warn!(error = %e, "Failed to close RabbitMQ channel");
        }

        let queue = result?;
        debug!(queue = %queue, order_id = %message.order_id(), "Published to RabbitMQ");
        Ok(Delivery::new(queue))
    }
}
