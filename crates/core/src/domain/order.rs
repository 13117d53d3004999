// Order Domain Model (the entity referenced by tracking jobs)

use serde::{Deserialize, Serialize};

/// Order ID
pub type OrderId = i64;

/// Metadata key holding the payment intent associated with an order
pub const INTENT_ID_META_KEY: &str = "_intent_id";

/// Order lifecycle status, in its lowercase wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::OnHold => write!(f, "on-hold"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Refunded => write!(f, "refunded"),
            OrderStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Order entity as fetched from the external store at execution time.
///
/// Jobs carry only the order id; the handler re-reads the order when the job
/// runs, so the tracked state is always the current one, not the state at
/// scheduling time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub number: String,
    pub status: OrderStatus,
    pub currency: String,
    /// Decimal amount as carried on the wire
    pub total: String,
    pub customer_id: i64,
    pub billing_email: String,
    pub created_at: i64, // epoch seconds
    pub updated_at: i64,
    pub payment_method: String,
}

/// The exact field set sent to the tracking API: every order field plus the
/// `_intent_id` metadata value. Statically enumerable on purpose, so the
/// outbound surface is visible at a glance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingPayload {
    pub id: OrderId,
    pub number: String,
    pub status: OrderStatus,
    pub currency: String,
    pub total: String,
    pub customer_id: i64,
    pub billing_email: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub payment_method: String,
    #[serde(rename = "_intent_id")]
    pub intent_id: String,
}

impl TrackingPayload {
    /// Merge an order's full field set with its intent id.
    /// `intent_id` defaults to the empty string when the metadata is absent.
    pub fn from_order(order: &Order, intent_id: String) -> Self {
        Self {
            id: order.id,
            number: order.number.clone(),
            status: order.status,
            currency: order.currency.clone(),
            total: order.total.clone(),
            customer_id: order.customer_id,
            billing_email: order.billing_email.clone(),
            created_at: order.created_at,
            updated_at: order.updated_at,
            payment_method: order.payment_method.clone(),
            intent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            id: 42,
            number: "42".to_string(),
            status: OrderStatus::Processing,
            currency: "USD".to_string(),
            total: "19.90".to_string(),
            customer_id: 7,
            billing_email: "customer@example.com".to_string(),
            created_at: 1_700_000_000,
            updated_at: 1_700_000_100,
            payment_method: "card".to_string(),
        }
    }

    #[test]
    fn test_payload_carries_all_order_fields() {
        let order = sample_order();
        let payload = TrackingPayload::from_order(&order, "pi_123".to_string());

        assert_eq!(payload.id, order.id);
        assert_eq!(payload.status, order.status);
        assert_eq!(payload.total, order.total);
        assert_eq!(payload.intent_id, "pi_123");
    }

    #[test]
    fn test_payload_serializes_intent_under_meta_key() {
        let payload = TrackingPayload::from_order(&sample_order(), "pi_123".to_string());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["_intent_id"], "pi_123");
        assert_eq!(value["status"], "processing");
    }

    #[test]
    fn test_on_hold_wire_form() {
        assert_eq!(OrderStatus::OnHold.to_string(), "on-hold");
        let value = serde_json::to_value(OrderStatus::OnHold).unwrap();
        assert_eq!(value, "on-hold");
    }
}
