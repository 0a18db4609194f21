//! Notification announcing a captured order to downstream consumers.

use super::order::OrderId;

/// Content type the legacy broker labels messages with.
///
/// The body is not strict JSON; existing consumers parse the exact text
/// produced by [`OrderMessage::body`].
pub const CONTENT_TYPE: &str = "application/json";

/// The message published for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    order_id: OrderId,
    team_name: String,
}

impl OrderMessage {
    pub fn new(order_id: OrderId, team_name: impl Into<String>) -> Self {
        Self {
            order_id,
            team_name: team_name.into(),
        }
    }

    #[must_use]
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Wire body: `{{'order': '<id>', 'source': '<team>'}}`.
    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "{{{{'order': '{}', 'source': '{}'}}}}",
            self.order_id, self.team_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_matches_consumer_format() {
        let message = OrderMessage::new(OrderId::new("5d1b7c0e9a1f2c3d4e5f6a7b"), "team-42");
        assert_eq!(
            message.body(),
            "{{'order': '5d1b7c0e9a1f2c3d4e5f6a7b', 'source': 'team-42'}}"
        );
    }

    #[test]
    fn body_is_not_strict_json() {
        let message = OrderMessage::new(OrderId::new("abc"), "team");
        assert!(serde_json::from_str::<serde_json::Value>(&message.body()).is_err());
    }
}
