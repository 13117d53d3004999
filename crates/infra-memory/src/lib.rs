// onceq Infrastructure - In-Memory Queue Adapter
// Implements: JobQueue
//
// Deterministic stand-in for a persistent queue backend: execution only
// happens when the caller drives `run_due`, so tests control time fully.
// No retry or backoff lives here; that policy belongs to real backends.

mod memory_queue;

pub use memory_queue::{InMemoryJobQueue, RunOutcome};
