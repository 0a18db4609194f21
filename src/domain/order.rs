//! The order entity and the values derived from it during capture.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Status every captured order is stored with.
pub const OPEN_STATUS: &str = "Open";

/// Source value API explorers fill in by default; treated as unset.
pub const SOURCE_PLACEHOLDER: &str = "string";

/// Store-assigned order identifier (hex-encoded object id).
///
/// Empty until the order has been through persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new `OrderId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the order ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True before the store has assigned an identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A customer order as submitted by the API layer.
///
/// Field names follow the JSON contract of the order API (`ID`,
/// `EmailAddress`, ...). Persistence overwrites `id`, `product`, `status`
/// and, when blank, `source`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Order {
    #[serde(rename = "ID")]
    pub id: OrderId,
    pub email_address: String,
    pub preferred_language: String,
    pub product: String,
    pub total: Decimal,
    pub source: String,
    pub status: String,
}

impl Order {
    /// Create an order for the given customer with every other field blank.
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            ..Self::default()
        }
    }

    /// Check the invariants callers are responsible for.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyEmail`] when no e-mail address is set and
    /// [`DomainError::NegativeTotal`] for negative totals.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email_address.trim().is_empty() {
            return Err(DomainError::EmptyEmail);
        }
        if self.total.is_sign_negative() && !self.total.is_zero() {
            return Err(DomainError::NegativeTotal { total: self.total });
        }
        Ok(())
    }

    /// True when the source should be replaced by the configured default.
    #[must_use]
    pub fn needs_default_source(&self) -> bool {
        self.source.is_empty() || self.source == SOURCE_PLACEHOLDER
    }
}

/// Synthetic product label doubling as the shard key value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductPartition(u32);

impl ProductPartition {
    pub const fn new(partition: u32) -> Self {
        Self(partition)
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_order_has_no_identifier() {
        let order = Order::new("a@b.com");
        assert!(order.id.is_empty());
        assert_eq!(order.email_address, "a@b.com");
        assert!(order.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_email() {
        let order = Order::new("   ");
        assert_eq!(order.validate(), Err(DomainError::EmptyEmail));
    }

    #[test]
    fn validate_rejects_negative_total() {
        let order = Order {
            total: dec!(-0.01),
            ..Order::new("a@b.com")
        };
        assert_eq!(
            order.validate(),
            Err(DomainError::NegativeTotal { total: dec!(-0.01) })
        );
    }

    #[test]
    fn validate_accepts_zero_total() {
        let order = Order {
            total: dec!(0),
            ..Order::new("a@b.com")
        };
        assert!(order.validate().is_ok());
    }

    #[test]
    fn placeholder_and_blank_sources_need_default() {
        let mut order = Order::new("a@b.com");
        assert!(order.needs_default_source());

        order.source = SOURCE_PLACEHOLDER.into();
        assert!(order.needs_default_source());

        order.source = "aks".into();
        assert!(!order.needs_default_source());
    }

    #[test]
    fn product_partition_label() {
        assert_eq!(ProductPartition::new(7).to_string(), "product-7");
        assert_eq!(ProductPartition::new(0).index(), 0);
    }

    #[test]
    fn json_uses_api_field_names() {
        let order: Order = serde_json::from_str(
            r#"{"EmailAddress":"a@b.com","Status":"Pending","Total":12.5}"#,
        )
        .unwrap();
        assert_eq!(order.email_address, "a@b.com");
        assert_eq!(order.status, "Pending");
        assert_eq!(order.total, dec!(12.5));
        assert!(order.id.is_empty());

        let json = serde_json::to_value(&Order {
            id: OrderId::new("5f1c"),
            ..order
        })
        .unwrap();
        assert_eq!(json["ID"], "5f1c");
        assert_eq!(json["EmailAddress"], "a@b.com");
        assert!(json.get("PreferredLanguage").is_some());
    }
}
