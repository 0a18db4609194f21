//! Composition root: turns a [`Config`] into a started [`OrderCapture`].

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::amqp::{EventHubPublisher, RabbitPublisher};
use crate::adapter::outbound::appinsights::AppInsights;
use crate::adapter::outbound::mongo::{MongoOrderStore, MongoTarget};
use crate::adapter::outbound::partition::{RandomPartitions, SeededPartitions};
use crate::application::{CaptureSettings, OrderCapture, Telemetry};
use crate::domain::QueueKind;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::partition::PartitionPicker;
use crate::port::outbound::queue::OrderQueue;
use crate::port::outbound::store::OrderStore;
use crate::port::outbound::telemetry::{LogSink, TelemetrySink};

/// Build the telemetry emitter.
///
/// The challenge sink falls back to logging when no challenge key is set;
/// the custom sink only exists when the team supplied its own key.
pub fn build_telemetry(config: &Config) -> Telemetry {
    let env = &config.environment;
    let endpoint = &config.telemetry.endpoint;

    let challenge: Arc<dyn TelemetrySink> = if env.challenge_insights_key.is_empty() {
        Arc::new(LogSink)
    } else {
        Arc::new(AppInsights::new(&env.challenge_insights_key, endpoint))
    };

    let custom: Option<Arc<dyn TelemetrySink>> = if env.insights_key.is_empty() {
        None
    } else {
        info!("Custom telemetry enabled");
        Some(Arc::new(AppInsights::new(&env.insights_key, endpoint)))
    };

    Telemetry::new(challenge, custom)
}

/// Partition picker shared by product labelling and Event Hubs routing.
pub(crate) fn build_partition_picker(config: &Config) -> Arc<dyn PartitionPicker> {
    match config.queue.partition_seed {
        Some(seed) => {
            info!(seed, "Using seeded partition picker");
            Arc::new(SeededPartitions::new(seed))
        }
        None => Arc::new(RandomPartitions),
    }
}

pub(crate) fn build_store(config: &Config, telemetry: &Telemetry) -> Result<Arc<dyn OrderStore>> {
    let target = MongoTarget::parse(&config.environment.mongo_url).map_err(|e| {
        telemetry.track_exception(&e);
        e
    })?;

    info!(
        username = target.username.as_deref().unwrap_or(""),
        host = %target.host,
        database = %config.store.database,
        tls = target.tls,
        "Connecting to {}",
        config.store_kind()
    );

    let store = MongoOrderStore::new(&target, &config.store).map_err(|e| {
        telemetry.track_exception(&e);
        e
    })?;
    Ok(Arc::new(store))
}

pub(crate) fn build_queue(
    config: &Config,
    picker: Arc<dyn PartitionPicker>,
) -> Result<Arc<dyn OrderQueue>> {
    let url = config.environment.amqp_url.clone();
    let queue: Arc<dyn OrderQueue> = match config.queue_kind() {
        QueueKind::Legacy => Arc::new(RabbitPublisher::new(url, &config.queue)),
        QueueKind::Stream => Arc::new(EventHubPublisher::new(url, &config.queue, picker)?),
    };
    Ok(queue)
}

/// Wire adapters from configuration without touching the network.
///
/// # Errors
///
/// Returns an error if a connection URL cannot be parsed.
pub fn build_capture(config: &Config) -> Result<OrderCapture> {
    build_capture_with(config, build_telemetry(config))
}

/// Wire adapters around an existing telemetry emitter, so the caller keeps
/// a handle to flush it.
///
/// # Errors
///
/// Returns an error if a connection URL cannot be parsed.
pub fn build_capture_with(config: &Config, telemetry: Telemetry) -> Result<OrderCapture> {
    let picker = build_partition_picker(config);
    let store = build_store(config, &telemetry)?;
    let queue = build_queue(config, Arc::clone(&picker))?;

    Ok(OrderCapture::new(
        CaptureSettings::from(config),
        store,
        queue,
        telemetry,
        picker,
    ))
}

/// Report the environment, wire adapters and connect them.
///
/// # Errors
///
/// Returns an error if wiring fails or the store or queue is unreachable.
pub async fn start_capture(config: &Config) -> Result<OrderCapture> {
    config.environment.report();
    let capture = build_capture(config)?;
    capture.start().await?;
    Ok(capture)
}
