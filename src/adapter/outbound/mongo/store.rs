//! MongoDB/CosmosDB order store implementation.
//!
//! Provides persistent storage for captured orders using the official
//! MongoDB driver. The client keeps its own connection pool and is shared
//! by every request.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{
    Acknowledgment, ClientOptions, Credential, ServerAddress, Tls, TlsOptions, WriteConcern,
};
use mongodb::{Client, Collection};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::info;

use super::target::MongoTarget;
use crate::domain::{Order, OrderId};
use crate::error::{Error, Result};
use crate::infrastructure::config::store::StoreConfig;
use crate::port::outbound::store::OrderStore;

/// Stored shape of an order, keeping the lowercase field names existing
/// readers of the collection expect.
#[derive(Debug, Serialize)]
struct OrderDocument {
    id: String,
    emailaddress: String,
    preferredlanguage: String,
    product: String,
    total: f64,
    source: String,
    status: String,
}

impl From<&Order> for OrderDocument {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            emailaddress: order.email_address.clone(),
            preferredlanguage: order.preferred_language.clone(),
            product: order.product.clone(),
            total: order.total.to_f64().unwrap_or_default(),
            source: order.source.clone(),
            status: order.status.clone(),
        }
    }
}

/// MongoDB-backed order store.
///
/// Implements the [`OrderStore`] trait. Works unchanged against CosmosDB's
/// MongoDB API.
pub struct MongoOrderStore {
    client: Client,
    database: String,
    namespace: String,
    shard_key: String,
    orders: Collection<OrderDocument>,
}

impl MongoOrderStore {
    /// Build a store for the given target. No I/O happens until the first
    /// command; call [`OrderStore::ping`] to verify connectivity.
    ///
    /// # Errors
    /// Returns an error if the driver rejects the options.
    pub fn new(target: &MongoTarget, config: &StoreConfig) -> Result<Self> {
        let options = client_options(target, config)?;
        let client =
            Client::with_options(options).map_err(|e| Error::Connection(e.to_string()))?;
        let orders = client
            .database(&config.database)
            .collection::<OrderDocument>(&config.collection);

        Ok(Self {
            client,
            database: config.database.clone(),
            namespace: config.namespace(),
            shard_key: config.shard_key.clone(),
            orders,
        })
    }
}

fn client_options(target: &MongoTarget, config: &StoreConfig) -> Result<ClientOptions> {
    let mut options = ClientOptions::default();
    options.hosts =
        vec![ServerAddress::parse(&target.host).map_err(|e| Error::Connection(e.to_string()))?];
    options.connect_timeout = Some(config.connect_timeout());
    options.server_selection_timeout = Some(config.connect_timeout());
    // CosmosDB's MongoDB API rejects retryable writes.
    options.retry_writes = Some(false);

    if let Some(username) = &target.username {
        let mut credential = Credential::default();
        credential.username = Some(username.clone());
        credential.password = target.password.clone();
        credential.source = config.auth_source.clone();
        options.credential = Some(credential);
    }

    if target.tls {
        options.tls = Some(Tls::Enabled(TlsOptions::default()));
    }

    if !config.acknowledge_writes {
        let mut write_concern = WriteConcern::default();
        write_concern.w = Some(Acknowledgment::Nodes(0));
        options.write_concern = Some(write_concern);
    }

    Ok(options)
}

#[async_trait]
impl OrderStore for MongoOrderStore {
    fn assign_id(&self) -> OrderId {
        OrderId::new(ObjectId::new().to_hex())
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(())
    }

    async fn ensure_sharded(&self) -> Result<()> {
        let mut key = Document::new();
        key.insert(self.shard_key.as_str(), "hashed");

        let result = self
            .client
            .database(&self.database)
            .run_command(
                doc! { "shardCollection": self.namespace.as_str(), "key": key },
                None,
            )
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        info!(namespace = %self.namespace, result = %result, "Created sharded MongoDB collection");
        Ok(())
    }

    async fn insert(&self, order: &Order) -> Result<()> {
        self.orders
            .insert_one(OrderDocument::from(order), None)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn target(tls: bool) -> MongoTarget {
        MongoTarget {
            host: "mongo:27017".into(),
            username: Some("team".into()),
            password: Some("secret".into()),
            tls,
        }
    }

    #[test]
    fn document_uses_lowercase_field_names() {
        let order = Order {
            id: OrderId::new("5d1b7c0e9a1f2c3d4e5f6a7b"),
            product: "product-3".into(),
            total: dec!(19.99),
            source: "aks".into(),
            status: "Open".into(),
            ..Order::new("a@b.com")
        };

        let doc = mongodb::bson::to_document(&OrderDocument::from(&order)).unwrap();

        assert_eq!(doc.get_str("id").unwrap(), "5d1b7c0e9a1f2c3d4e5f6a7b");
        assert_eq!(doc.get_str("emailaddress").unwrap(), "a@b.com");
        assert_eq!(doc.get_str("preferredlanguage").unwrap(), "");
        assert_eq!(doc.get_str("product").unwrap(), "product-3");
        assert!((doc.get_f64("total").unwrap() - 19.99).abs() < 1e-9);
        assert_eq!(doc.get_str("status").unwrap(), "Open");
    }

    #[test]
    fn options_disable_write_acknowledgement_by_default() {
        let options = client_options(&target(false), &StoreConfig::default()).unwrap();

        let w = options.write_concern.and_then(|wc| wc.w);
        assert_eq!(w, Some(Acknowledgment::Nodes(0)));
        assert_eq!(options.retry_writes, Some(false));
        assert_eq!(options.connect_timeout, Some(std::time::Duration::from_secs(60)));
        assert!(options.tls.is_none());
    }

    #[test]
    fn options_keep_acknowledgement_when_configured() {
        let config = StoreConfig {
            acknowledge_writes: true,
            ..StoreConfig::default()
        };
        let options = client_options(&target(true), &config).unwrap();

        assert!(options.write_concern.is_none());
        assert_eq!(options.retry_writes, Some(false));
        assert!(matches!(options.tls, Some(Tls::Enabled(_))));
        let credential = options.credential.unwrap();
        assert_eq!(credential.username.as_deref(), Some("team"));
        assert_eq!(credential.password.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn assigned_ids_are_object_id_hex() {
        let store = MongoOrderStore::new(&target(false), &StoreConfig::default()).unwrap();
        let first = store.assign_id();
        let second = store.assign_id();

        assert_eq!(first.as_str().len(), 24);
        assert!(first.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }
}
