// Tracking Client Port (Interface)
// Abstraction for the external order-tracking API.

use crate::domain::TrackingPayload;
use async_trait::async_trait;

/// Client for the external tracking API.
///
/// Failure is signaled by the returned bool, not an error type: the caller
/// (a job handler) forwards it verbatim to the queue as the retry signal.
#[async_trait]
pub trait TrackingClient: Send + Sync {
    /// Report an order to the tracking API.
    /// `is_update` is false for newly created orders, true for updates.
    async fn track_order(&self, payload: &TrackingPayload, is_update: bool) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Tracking client double with a scripted result and call recording
    pub struct RecordingTrackingClient {
        result: bool,
        calls: Mutex<Vec<(TrackingPayload, bool)>>,
    }

    impl RecordingTrackingClient {
        pub fn succeeding() -> Self {
            Self::with_result(true)
        }

        pub fn failing() -> Self {
            Self::with_result(false)
        }

        pub fn with_result(result: bool) -> Self {
            Self {
                result,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(TrackingPayload, bool)> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TrackingClient for RecordingTrackingClient {
        async fn track_order(&self, payload: &TrackingPayload, is_update: bool) -> bool {
            self.calls.lock().unwrap().push((payload.clone(), is_update));
            self.result
        }
    }
}
