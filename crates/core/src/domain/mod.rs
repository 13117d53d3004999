// Domain Layer - Pure entities and job identity

pub mod job;
pub mod order;

// Re-exports
pub use job::{HookName, Job, JobArgs, JobGroup, UNGROUPED};
pub use order::{Order, OrderId, OrderStatus, TrackingPayload, INTENT_ID_META_KEY};
