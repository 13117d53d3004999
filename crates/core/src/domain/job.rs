// Job Domain Model

use serde::{Deserialize, Serialize};

/// Hook name (selects which handler a scheduled job invokes)
pub type HookName = String;

/// Group (namespace string scoping duplicate-job matching)
pub type JobGroup = String;

/// The empty group, meaning "ungrouped"
pub const UNGROUPED: &str = "";

/// Job Args (JSON payload, passed verbatim to the handler at execution time)
///
/// Equality is structural on the full payload: two args values collide only
/// when every member matches, member order aside. This is the `args` leg of
/// the `(hook, args, group)` identity used for replace-on-duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobArgs(serde_json::Value);

impl JobArgs {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// The default payload for jobs scheduled without args
    pub fn empty() -> Self {
        Self(serde_json::json!({}))
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Read a member of an object payload, `None` for non-objects
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}

impl Default for JobArgs {
    fn default() -> Self {
        Self::empty()
    }
}

/// A pending unit of deferred work as held by the queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// When the queue should first attempt execution (epoch seconds).
    /// Past values are accepted and run near-immediately.
    pub run_at: i64,
    pub hook: HookName,
    pub args: JobArgs,
    pub group: JobGroup,
}

impl Job {
    pub fn new(
        run_at: i64,
        hook: impl Into<String>,
        args: JobArgs,
        group: impl Into<String>,
    ) -> Self {
        Self {
            run_at,
            hook: hook.into(),
            args,
            group: group.into(),
        }
    }

    /// Exact-tuple identity match: hook, full args payload, and group.
    /// `run_at` is deliberately not part of the identity.
    pub fn matches(&self, hook: &str, args: &JobArgs, group: &str) -> bool {
        self.hook == hook && self.args == *args && self.group == group
    }
}
