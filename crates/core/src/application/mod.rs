// Application Layer - Use Cases and Services

pub mod dispatcher;
pub mod tracking;

// Re-exports
pub use dispatcher::JobDispatcher;
pub use tracking::{OrderTrackingService, TRACK_NEW_ORDER, TRACK_UPDATED_ORDER};
