//! Order capture workflow.
//!
//! [`OrderCapture`] is the surface the request handler calls: `persist`
//! stores an order, `publish` announces it. The two calls are independent;
//! nothing ties a stored order to a published one, so a caller can observe
//! either without the other.
//!
//! Failure policy:
//! - [`OrderCapture::start`] fails when the store is unreachable. A failed
//!   sharding command is expected after the first run and only logged.
//! - [`OrderCapture::persist`] never fails. Insert errors are logged and
//!   reported through telemetry; the caller still receives the order with
//!   its assigned fields.
//! - [`OrderCapture::publish`] returns the transport error after reporting
//!   it. The hosting process decides whether that is fatal.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use super::telemetry::Telemetry;
use crate::domain::{Order, OrderMessage, ProductPartition, QueueKind, StoreKind, OPEN_STATUS};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::partition::PartitionPicker;
use crate::port::outbound::queue::{Delivery, OrderQueue};
use crate::port::outbound::store::OrderStore;
use crate::port::outbound::telemetry::Dependency;

/// Dependency type reported for store calls.
const STORE_DEPENDENCY_TYPE: &str = "MongoDB";

/// Dependency type reported for queue calls.
const QUEUE_DEPENDENCY_TYPE: &str = "AMQP";

/// Values the capture workflow needs from configuration.
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    /// Team label stamped on events and messages.
    pub team_name: String,
    /// Source used for orders submitted without one.
    pub default_source: String,
    pub store_kind: StoreKind,
    /// Store connection string, reported as the dependency target.
    pub store_target: String,
    pub queue_kind: QueueKind,
    /// Queue connection string, reported as the dependency target.
    pub queue_target: String,
    /// Number of `product-N` labels orders are spread over.
    pub product_partitions: u32,
}

impl From<&Config> for CaptureSettings {
    fn from(config: &Config) -> Self {
        Self {
            team_name: config.environment.team_name.clone(),
            default_source: config.environment.default_source.clone(),
            store_kind: config.store_kind(),
            store_target: config.environment.mongo_url.clone(),
            queue_kind: config.queue_kind(),
            queue_target: config.environment.amqp_url.clone(),
            product_partitions: config.store.product_partitions,
        }
    }
}

/// Persists orders and publishes order notifications.
pub struct OrderCapture {
    settings: CaptureSettings,
    store: Arc<dyn OrderStore>,
    queue: Arc<dyn OrderQueue>,
    telemetry: Telemetry,
    partitions: Arc<dyn PartitionPicker>,
}

impl OrderCapture {
    pub fn new(
        settings: CaptureSettings,
        store: Arc<dyn OrderStore>,
        queue: Arc<dyn OrderQueue>,
        telemetry: Telemetry,
        partitions: Arc<dyn PartitionPicker>,
    ) -> Self {
        Self {
            settings,
            store,
            queue,
            telemetry,
            partitions,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    /// Connect to the store, shard the order collection and connect the queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or the queue cannot be reached.
    pub async fn start(&self) -> Result<()> {
        let store_kind = self.settings.store_kind;
        info!(store = %store_kind, queue = %self.settings.queue_kind, "Starting order capture");

        let started_at = Utc::now();
        let pinged = self.store.ping().await;
        self.track_store("Create session", pinged.is_ok(), started_at);
        if let Err(e) = pinged {
            error!(error = %e, url = %self.settings.store_target, "Can't connect to {store_kind}");
            self.telemetry.track_exception(&e);
            return Err(e);
        }
        info!(url = %self.settings.store_target, "Connected to {store_kind}");

        match self.store.ensure_sharded().await {
            Ok(()) => info!("Sharded order collection ready"),
            Err(e) => warn!(
                error = %e,
                "Could not create/re-create sharded collection. Either it is already sharded or sharding is not supported"
            ),
        }

        if let Err(e) = self.queue.connect().await {
            error!(error = %e, url = %self.settings.queue_target, "Can't connect to {}", self.settings.queue_kind);
            self.telemetry.track_exception(&e);
            return Err(e);
        }
        info!(url = %self.settings.queue_target, "Using {}", self.settings.queue_kind);
        Ok(())
    }

    /// Store a new order.
    ///
    /// Assigns the identifier and a `product-N` partition label, forces the
    /// status to [`OPEN_STATUS`] and fills a blank or placeholder source from
    /// configuration. The returned order carries these fields even when the
    /// insert failed.
    pub async fn persist(&self, mut order: Order) -> Order {
        let started_at = Utc::now();
        info!(team = %self.settings.team_name, "Capturing order");

        let partition = self.partitions.pick(self.settings.product_partitions);
        order.product = ProductPartition::new(partition).to_string();
        order.id = self.store.assign_id();
        if !order.status.is_empty() && order.status != OPEN_STATUS {
            info!(requested = %order.status, "Overriding requested status with {OPEN_STATUS}");
        }
        order.status = OPEN_STATUS.to_string();
        if order.needs_default_source() {
            order.source = self.settings.default_source.clone();
        }

        let success = match self.store.insert(&order).await {
            Ok(()) => {
                info!(
                    order = ?order,
                    store = %self.settings.store_kind,
                    "Inserted order"
                );
                true
            }
            Err(e) => {
                error!(error = %e, order_id = %order.id, "Problem inserting order");
                self.telemetry.track_exception(&e);
                false
            }
        };

        self.telemetry.track_event(format!(
            "CapureOrder: - Team Name {} db {}",
            self.settings.team_name, self.settings.store_kind
        ));
        self.track_store("Insert order", success, started_at);

        order
    }

    /// Announce a stored order on the queue.
    ///
    /// Only the order identifier is read.
    ///
    /// # Errors
    ///
    /// Returns the transport error when the message could not be sent.
    pub async fn publish(&self, order: &Order) -> Result<Delivery> {
        let message = OrderMessage::new(order.id.clone(), self.settings.team_name.clone());
        let queue_kind = self.settings.queue_kind;
        let started_at = Utc::now();

        let result = self.queue.publish(&message).await;

        self.telemetry.track_dependency(Dependency {
            name: queue_kind.label().to_string(),
            kind: QUEUE_DEPENDENCY_TYPE.to_string(),
            target: self.settings.queue_target.clone(),
            success: result.is_ok(),
            operation: "Send message".to_string(),
            started_at,
            finished_at: Utc::now(),
        });

        match result {
            Ok(delivery) => {
                info!(
                    success = true,
                    url = %self.settings.queue_target,
                    destination = %delivery.destination,
                    body = %message.body(),
                    "Sent to {queue_kind}"
                );
                Ok(delivery)
            }
            Err(e) => {
                error!(error = %e, order_id = %order.id, "Sending message to {queue_kind} failed");
                self.telemetry.track_exception(&e);
                Err(e)
            }
        }
    }

    fn track_store(&self, operation: &str, success: bool, started_at: chrono::DateTime<Utc>) {
        self.telemetry.track_dependency(Dependency {
            name: self.settings.store_kind.label().to_string(),
            kind: STORE_DEPENDENCY_TYPE.to_string(),
            target: self.settings.store_target.clone(),
            success,
            operation: operation.to_string(),
            started_at,
            finished_at: Utc::now(),
        });
    }
}
