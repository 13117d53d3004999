// Port Layer - Interfaces for external dependencies

pub mod job_queue;
pub mod order_store;
pub mod time_provider;
pub mod tracking_client;

// Re-exports
pub use job_queue::{HandlerMap, JobHandler, JobQueue};
pub use order_store::OrderStore;
pub use time_provider::{SystemTimeProvider, TimeProvider};
pub use tracking_client::TrackingClient;
