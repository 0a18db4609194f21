//! Document store settings.

use std::time::Duration;

use serde::Deserialize;

fn default_database() -> String {
    "k8orders".into()
}

fn default_collection() -> String {
    "orders".into()
}

fn default_shard_key() -> String {
    "product".into()
}

const fn default_connect_timeout_secs() -> u64 {
    60
}

const fn default_product_partitions() -> u32 {
    11
}

/// Document store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Database holding the order collection.
    #[serde(default = "default_database")]
    pub database: String,
    /// Order collection name.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Field the collection is sharded on (hashed).
    #[serde(default = "default_shard_key")]
    pub shard_key: String,
    /// Connect and server selection timeout (default: 60).
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Number of synthetic `product-N` labels orders are spread over (default: 11).
    #[serde(default = "default_product_partitions")]
    pub product_partitions: u32,
    /// Wait for the server to acknowledge inserts. Off by default: inserts
    /// are fire-and-forget.
    #[serde(default)]
    pub acknowledge_writes: bool,
    /// Database credentials are checked against; driver default when unset.
    #[serde(default)]
    pub auth_source: Option<String>,
}

impl StoreConfig {
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Fully qualified `database.collection` namespace.
    #[must_use]
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            collection: default_collection(),
            shard_key: default_shard_key(),
            connect_timeout_secs: default_connect_timeout_secs(),
            product_partitions: default_product_partitions(),
            acknowledge_writes: false,
            auth_source: None,
        }
    }
}
