//! Application Insights telemetry client.
//!
//! Implements [`TelemetrySink`] by posting one envelope per item to the
//! ingestion endpoint on a background task. Pending posts are kept in a
//! [`JoinSet`] so the host can wait for them before its runtime shuts down.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use reqwest::Client;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::envelope::Envelope;
use crate::error::{Error, Result};
use crate::port::outbound::telemetry::{TelemetryItem, TelemetrySink};

/// Telemetry sink for one Application Insights resource.
#[derive(Debug, Clone)]
pub struct AppInsights {
    client: Client,
    endpoint: String,
    instrumentation_key: String,
    pending: Arc<Mutex<JoinSet<()>>>,
}

impl AppInsights {
    #[must_use]
    pub fn new(instrumentation_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            instrumentation_key: instrumentation_key.into(),
            pending: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    /// Post a single envelope and wait for the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the endpoint rejects it.
    pub async fn send(&self, envelope: &Envelope) -> Result<()> {
        post(&self.client, &self.endpoint, envelope).await
    }

    /// Number of posts started and not yet collected by [`flush`](TelemetrySink::flush).
    #[must_use]
    pub fn pending(&self) -> usize {
        let mut pending = self.pending.lock();
        while pending.try_join_next().is_some() {}
        pending.len()
    }
}

async fn post(client: &Client, endpoint: &str, envelope: &Envelope) -> Result<()> {
    client
        .post(endpoint)
        .json(&[envelope])
        .send()
        .await?
        .error_for_status()
        .map_err(|e| Error::Connection(e.to_string()))?;
    Ok(())
}

#[async_trait]
impl TelemetrySink for AppInsights {
    fn track(&self, item: TelemetryItem) {
        let envelope = Envelope::new(&self.instrumentation_key, &item, Utc::now());

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime available, dropping telemetry item");
            return;
        };

        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let mut pending = self.pending.lock();
        while pending.try_join_next().is_some() {}
        pending.spawn_on(
            async move {
                match post(&client, &endpoint, &envelope).await {
                    Ok(()) => debug!(endpoint = %endpoint, "Telemetry sent"),
                    Err(e) => warn!(error = %e, "Failed to send telemetry"),
                }
            },
            &runtime,
        );
    }

    async fn flush(&self) {
        let mut pending = std::mem::take(&mut *self.pending.lock());
        while let Some(joined) = pending.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "Telemetry task failed");
            }
        }
    }
}
