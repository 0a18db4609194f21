//! Backend variants selected once from the connection URLs.

use std::fmt;

use serde::Serialize;

/// Host fragment identifying an Azure CosmosDB account.
pub const COSMOS_HOST_FRAGMENT: &str = "documents.azure.com";

/// Host fragment identifying an Azure Event Hubs namespace.
pub const EVENT_HUB_HOST_FRAGMENT: &str = "servicebus.windows.net";

/// Which flavour of document store sits behind `MONGOURL`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// A MongoDB server run by the team.
    #[default]
    SelfHosted,
    /// CosmosDB speaking the MongoDB wire protocol.
    ManagedCloud,
}

impl StoreKind {
    /// Detect the store flavour from its connection URL.
    #[must_use]
    pub fn detect(url: &str) -> Self {
        if url.contains(COSMOS_HOST_FRAGMENT) {
            Self::ManagedCloud
        } else {
            Self::SelfHosted
        }
    }

    /// Name used in logs and telemetry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SelfHosted => "MongoDB",
            Self::ManagedCloud => "CosmosDB",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which AMQP dialect sits behind `AMQPURL`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    /// AMQP 0.9.1 broker (RabbitMQ).
    #[default]
    Legacy,
    /// AMQP 1.0 event stream (Event Hubs).
    Stream,
}

impl QueueKind {
    /// Detect the queue dialect from its connection URL.
    #[must_use]
    pub fn detect(url: &str) -> Self {
        if url.contains(EVENT_HUB_HOST_FRAGMENT) {
            Self::Stream
        } else {
            Self::Legacy
        }
    }

    /// Name used in logs and telemetry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legacy => "RabbitMQ",
            Self::Stream => "EventHub",
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
