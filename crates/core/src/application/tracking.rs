// Order Tracking Service - queue-facing handlers over the tracking API
//
// Handlers re-read the order at execution time and forward the tracking
// API's boolean verbatim; retry-on-failure is the queue's policy, not ours.
// A missing order and a failed API call both come back as `false`: the
// original contract does not distinguish them, and neither do we.

use crate::domain::{JobArgs, Order, OrderId, TrackingPayload, INTENT_ID_META_KEY};
use crate::port::{HandlerMap, JobHandler, OrderStore, TrackingClient};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Hook fired when an order is created
pub const TRACK_NEW_ORDER: &str = "track_new_order";

/// Hook fired when an order is updated
pub const TRACK_UPDATED_ORDER: &str = "track_updated_order";

/// Service translating queue invocations into tracking-API calls
pub struct OrderTrackingService {
    orders: Arc<dyn OrderStore>,
    tracking: Arc<dyn TrackingClient>,
}

impl OrderTrackingService {
    pub fn new(orders: Arc<dyn OrderStore>, tracking: Arc<dyn TrackingClient>) -> Self {
        Self { orders, tracking }
    }

    /// Report a newly created order to the tracking API
    pub async fn track_new_order(&self, order_id: OrderId) -> bool {
        self.track(order_id, false).await
    }

    /// Report an updated order to the tracking API
    pub async fn track_updated_order(&self, order_id: OrderId) -> bool {
        self.track(order_id, true).await
    }

    async fn track(&self, order_id: OrderId, is_update: bool) -> bool {
        // Re-read the current state; the order may have been deleted between
        // scheduling and execution. That is a benign skip, not an error.
        let Some(order) = self.orders.find_by_id(order_id).await else {
            debug!(order_id = order_id, "order not found, skipping tracking");
            return false;
        };

        let payload = self.build_payload(&order).await;
        self.tracking.track_order(&payload, is_update).await
    }

    async fn build_payload(&self, order: &Order) -> TrackingPayload {
        let intent_id = self
            .orders
            .meta_field(order, INTENT_ID_META_KEY)
            .await
            .unwrap_or_default();
        TrackingPayload::from_order(order, intent_id)
    }

    /// The handler map for `JobDispatcher::register_handlers`
    pub fn handlers(service: &Arc<Self>) -> HandlerMap {
        let mut handlers = HandlerMap::new();
        handlers.insert(
            TRACK_NEW_ORDER.to_string(),
            Arc::new(TrackOrderHandler {
                service: Arc::clone(service),
                is_update: false,
            }) as Arc<dyn JobHandler>,
        );
        handlers.insert(
            TRACK_UPDATED_ORDER.to_string(),
            Arc::new(TrackOrderHandler {
                service: Arc::clone(service),
                is_update: true,
            }) as Arc<dyn JobHandler>,
        );
        handlers
    }
}

/// Adapter binding the service to the queue's handler shape
struct TrackOrderHandler {
    service: Arc<OrderTrackingService>,
    is_update: bool,
}

impl TrackOrderHandler {
    /// Args are expected to be an object carrying an `order_id` member
    fn order_id(args: &JobArgs) -> Option<OrderId> {
        args.get("order_id")?.as_i64()
    }
}

#[async_trait]
impl JobHandler for TrackOrderHandler {
    async fn run(&self, args: &JobArgs) -> bool {
        let Some(order_id) = Self::order_id(args) else {
            // Malformed args land in the same benign-skip channel as a
            // deleted order.
            warn!(args = %args.as_value(), "tracking job args carry no order_id");
            return false;
        };
        self.service.track(order_id, self.is_update).await
    }
}
