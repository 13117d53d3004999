// In-Memory JobQueue Implementation

use async_trait::async_trait;
use onceq_core::domain::{Job, JobArgs};
use onceq_core::error::Result;
use onceq_core::port::{JobHandler, JobQueue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Result of one handled job in a `run_due` pass
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub job: Job,
    /// The handler's completion signal, verbatim. A real backend would feed
    /// this into its retry bookkeeping; this adapter only reports it.
    pub succeeded: bool,
}

#[derive(Default)]
struct QueueState {
    pending: Vec<Job>,
    handlers: HashMap<String, Arc<dyn JobHandler>>,
}

/// Deterministic in-memory queue.
///
/// Pending jobs and the dispatch table live under one lock; execution is
/// pull-based via `run_due`, never spontaneous. The lock is released before
/// handlers run, so handlers may schedule further jobs.
#[derive(Default)]
pub struct InMemoryJobQueue {
    state: Mutex<QueueState>,
}

impl InMemoryJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the pending jobs, in insertion order
    pub fn pending_jobs(&self) -> Vec<Job> {
        self.state.lock().unwrap().pending.clone()
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().unwrap().pending.len()
    }

    /// Execute every pending job with `run_at <= now`, in `run_at` order
    /// (ties keep insertion order). Jobs whose hook has no registered
    /// handler are dropped silently. Returns one outcome per handled job.
    pub async fn run_due(&self, now: i64) -> Vec<RunOutcome> {
        let due: Vec<(Job, Option<Arc<dyn JobHandler>>)> = {
            let mut state = self.state.lock().unwrap();

            let mut due: Vec<Job> = Vec::new();
            let mut rest: Vec<Job> = Vec::new();
            for job in state.pending.drain(..) {
                if job.run_at <= now {
                    due.push(job);
                } else {
                    rest.push(job);
                }
            }
            state.pending = rest;

            due.sort_by_key(|job| job.run_at);
            due.into_iter()
                .map(|job| {
                    let handler = state.handlers.get(&job.hook).cloned();
                    (job, handler)
                })
                .collect()
        };

        let mut outcomes = Vec::new();
        for (job, handler) in due {
            let Some(handler) = handler else {
                warn!(hook = %job.hook, "no handler registered, dropping job");
                continue;
            };
            let succeeded = handler.run(&job.args).await;
            debug!(hook = %job.hook, succeeded = succeeded, "job executed");
            outcomes.push(RunOutcome { job, succeeded });
        }
        outcomes
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn register_handler(&self, hook: &str, handler: Arc<dyn JobHandler>) -> Result<()> {
        // Last registration wins. The port leaves this choice to the
        // implementation.
        self.state
            .lock()
            .unwrap()
            .handlers
            .insert(hook.to_string(), handler);
        Ok(())
    }

    async fn schedule_single(
        &self,
        run_at: i64,
        hook: &str,
        args: &JobArgs,
        group: &str,
    ) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .pending
            .push(Job::new(run_at, hook, args.clone(), group));
        Ok(())
    }

    async fn unschedule(&self, hook: &str, args: &JobArgs, group: &str) -> Result<()> {
        // Removes every pending match, the strongest reading that keeps the
        // at-most-one invariant even if duplicates were left behind.
        self.state
            .lock()
            .unwrap()
            .pending
            .retain(|job| !job.matches(hook, args, group));
        Ok(())
    }
}
