// Job Dispatcher - idempotent-by-identity scheduling over the queue port
//
// `schedule` treats unschedule+schedule as one logical replace operation so
// that repeat scheduling of the same `(hook, args, group)` tuple (for example
// several events firing during one order update) leaves a single pending job
// carrying the latest run_at. The two underlying calls are not atomic with
// respect to the queue's own concurrency: callers racing on the identical
// tuple are expected to be serialized upstream, a known limitation of the
// underlying primitive.

use crate::domain::JobArgs;
use crate::error::Result;
use crate::port::{HandlerMap, JobQueue, TimeProvider};
use std::sync::Arc;
use tracing::debug;

/// Stateless facade over the external job queue
pub struct JobDispatcher {
    queue: Arc<dyn JobQueue>,
    time_provider: Arc<dyn TimeProvider>,
}

impl JobDispatcher {
    pub fn new(queue: Arc<dyn JobQueue>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            queue,
            time_provider,
        }
    }

    /// Bind every handler into the queue's dispatch table.
    ///
    /// Call once per process lifetime, before any `schedule` call that could
    /// trigger these hooks. Rebinding an already-bound hook is left to the
    /// queue implementation's own policy.
    pub async fn register_handlers(&self, handlers: HandlerMap) -> Result<()> {
        for (hook, handler) in handlers {
            debug!(hook = %hook, "registering job handler");
            self.queue.register_handler(&hook, handler).await?;
        }
        Ok(())
    }

    /// Schedule a job, replacing any pending instance of the same
    /// `(hook, args, group)` tuple.
    ///
    /// `run_at` is epoch seconds; past values are accepted and typically run
    /// near-immediately. The hook is not validated against the registration
    /// table: jobs for unregistered hooks fail silently at execution time.
    pub async fn schedule(
        &self,
        run_at: i64,
        hook: &str,
        args: JobArgs,
        group: &str,
    ) -> Result<()> {
        // Drop any previously scheduled instance of this particular job.
        self.queue.unschedule(hook, &args, group).await?;

        debug!(hook = %hook, group = %group, run_at = run_at, "scheduling job");
        self.queue.schedule_single(run_at, hook, &args, group).await
    }

    /// Schedule relative to the injected clock
    pub async fn schedule_in(
        &self,
        delay_secs: i64,
        hook: &str,
        args: JobArgs,
        group: &str,
    ) -> Result<()> {
        let run_at = self.time_provider.now_secs() + delay_secs;
        self.schedule(run_at, hook, args, group).await
    }
}
