// Job Queue Port (Interface)
// Abstraction over the external persistent queue. Persistence, worker
// concurrency, retry and backoff all live behind this boundary.

use crate::domain::JobArgs;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// A handler bound to one hook name.
///
/// Invoked zero or more times by the queue for the life of the process (and
/// across restarts, since the queue persists jobs externally). The returned
/// bool is the queue's completion signal: `true` = done, `false` = may be
/// retried per the queue's own policy.
#[async_trait]
pub trait JobHandler: Send + Sync {
    async fn run(&self, args: &JobArgs) -> bool;
}

/// Mapping from hook name to its handler, registered once at startup
pub type HandlerMap = HashMap<String, Arc<dyn JobHandler>>;

/// Queue capability consumed by the dispatcher
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Bind a handler into the queue's dispatch table.
    /// Binding the same hook twice: which handler wins is owned by the
    /// queue implementation, not specified here.
    async fn register_handler(&self, hook: &str, handler: Arc<dyn JobHandler>) -> Result<()>;

    /// Insert one pending job
    async fn schedule_single(
        &self,
        run_at: i64,
        hook: &str,
        args: &JobArgs,
        group: &str,
    ) -> Result<()>;

    /// Cancel pending jobs matching the exact `(hook, args, group)` tuple.
    /// No-op when none match.
    async fn unschedule(&self, hook: &str, args: &JobArgs, group: &str) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// One recorded queue call, in arrival order
    #[derive(Debug, Clone, PartialEq)]
    pub enum QueueCall {
        Register {
            hook: String,
        },
        Schedule {
            run_at: i64,
            hook: String,
            args: JobArgs,
            group: String,
        },
        Unschedule {
            hook: String,
            args: JobArgs,
            group: String,
        },
    }

    /// Queue double that records every call for white-box assertions
    #[derive(Default)]
    pub struct RecordingJobQueue {
        calls: Mutex<Vec<QueueCall>>,
    }

    impl RecordingJobQueue {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<QueueCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl JobQueue for RecordingJobQueue {
        async fn register_handler(
            &self,
            hook: &str,
            _handler: Arc<dyn JobHandler>,
        ) -> Result<()> {
            self.calls.lock().unwrap().push(QueueCall::Register {
                hook: hook.to_string(),
            });
            Ok(())
        }

        async fn schedule_single(
            &self,
            run_at: i64,
            hook: &str,
            args: &JobArgs,
            group: &str,
        ) -> Result<()> {
            self.calls.lock().unwrap().push(QueueCall::Schedule {
                run_at,
                hook: hook.to_string(),
                args: args.clone(),
                group: group.to_string(),
            });
            Ok(())
        }

        async fn unschedule(&self, hook: &str, args: &JobArgs, group: &str) -> Result<()> {
            self.calls.lock().unwrap().push(QueueCall::Unschedule {
                hook: hook.to_string(),
                args: args.clone(),
                group: group.to_string(),
            });
            Ok(())
        }
    }
}
