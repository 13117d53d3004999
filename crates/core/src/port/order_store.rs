// Order Store Port (Interface)

use crate::domain::{Order, OrderId};
use async_trait::async_trait;

/// Read access to the external order store.
///
/// Not-found is a value here, not an error: an order may legitimately have
/// been deleted between scheduling and execution, and the handlers treat
/// that as a benign skip.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetch the current state of an order
    async fn find_by_id(&self, id: OrderId) -> Option<Order>;

    /// Read one metadata field of an order, `None` when absent
    async fn meta_field(&self, order: &Order, key: &str) -> Option<String>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Map-backed order store double
    #[derive(Default)]
    pub struct InMemoryOrderStore {
        orders: Mutex<HashMap<OrderId, Order>>,
        // (order_id, meta key) -> value
        metadata: Mutex<HashMap<(OrderId, String), String>>,
    }

    impl InMemoryOrderStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&self, order: Order) {
            self.orders.lock().unwrap().insert(order.id, order);
        }

        pub fn set_meta(&self, id: OrderId, key: impl Into<String>, value: impl Into<String>) {
            self.metadata
                .lock()
                .unwrap()
                .insert((id, key.into()), value.into());
        }

        pub fn remove(&self, id: OrderId) {
            self.orders.lock().unwrap().remove(&id);
        }
    }

    #[async_trait]
    impl OrderStore for InMemoryOrderStore {
        async fn find_by_id(&self, id: OrderId) -> Option<Order> {
            self.orders.lock().unwrap().get(&id).cloned()
        }

        async fn meta_field(&self, order: &Order, key: &str) -> Option<String> {
            self.metadata
                .lock()
                .unwrap()
                .get(&(order.id, key.to_string()))
                .cloned()
        }
    }
}
