//! Dedup scheduling integration tests
//!
//! Exercises the dispatcher's replace-on-duplicate contract against the
//! in-memory queue adapter: after any number of `schedule` calls with an
//! identical `(hook, args, group)` tuple, exactly one pending job remains,
//! carrying the latest run_at.

use std::sync::Arc;

use onceq_core::application::JobDispatcher;
use onceq_core::domain::{JobArgs, UNGROUPED};
use onceq_core::port::SystemTimeProvider;
use onceq_memqueue::InMemoryJobQueue;

fn dispatcher(queue: Arc<InMemoryJobQueue>) -> JobDispatcher {
    JobDispatcher::new(queue, Arc::new(SystemTimeProvider))
}

fn order_args(order_id: i64) -> JobArgs {
    JobArgs::new(serde_json::json!({ "order_id": order_id }))
}

#[tokio::test]
async fn test_identical_tuple_replaces_pending_job() {
    let queue = Arc::new(InMemoryJobQueue::new());
    let dispatcher = dispatcher(queue.clone());

    dispatcher
        .schedule(1_700_000_000, "track_new_order", order_args(42), UNGROUPED)
        .await
        .unwrap();
    dispatcher
        .schedule(1_700_000_500, "track_new_order", order_args(42), UNGROUPED)
        .await
        .unwrap();

    let pending = queue.pending_jobs();
    assert_eq!(pending.len(), 1, "second call must replace, not duplicate");
    assert_eq!(pending[0].run_at, 1_700_000_500, "latest run_at wins");
}

#[tokio::test]
async fn test_distinct_args_never_cancel_each_other() {
    let queue = Arc::new(InMemoryJobQueue::new());
    let dispatcher = dispatcher(queue.clone());

    dispatcher
        .schedule(1_700_000_000, "track_new_order", order_args(42), UNGROUPED)
        .await
        .unwrap();
    dispatcher
        .schedule(1_700_000_000, "track_new_order", order_args(43), UNGROUPED)
        .await
        .unwrap();

    assert_eq!(queue.pending_count(), 2, "distinct tuples are independent");
}

#[tokio::test]
async fn test_distinct_hooks_never_cancel_each_other() {
    let queue = Arc::new(InMemoryJobQueue::new());
    let dispatcher = dispatcher(queue.clone());

    dispatcher
        .schedule(1_700_000_000, "track_new_order", order_args(42), UNGROUPED)
        .await
        .unwrap();
    dispatcher
        .schedule(
            1_700_000_000,
            "track_updated_order",
            order_args(42),
            UNGROUPED,
        )
        .await
        .unwrap();

    assert_eq!(queue.pending_count(), 2);
}

#[tokio::test]
async fn test_group_scopes_duplicate_matching() {
    let queue = Arc::new(InMemoryJobQueue::new());
    let dispatcher = dispatcher(queue.clone());

    dispatcher
        .schedule(1_700_000_000, "track_new_order", order_args(42), "payments")
        .await
        .unwrap();
    dispatcher
        .schedule(1_700_000_500, "track_new_order", order_args(42), UNGROUPED)
        .await
        .unwrap();

    assert_eq!(
        queue.pending_count(),
        2,
        "changing the group yields a distinct job"
    );
}

#[tokio::test]
async fn test_schedule_is_idempotent_over_many_calls() {
    let queue = Arc::new(InMemoryJobQueue::new());
    let dispatcher = dispatcher(queue.clone());

    for i in 0..10 {
        dispatcher
            .schedule(
                1_700_000_000 + i * 50,
                "track_new_order",
                order_args(42),
                UNGROUPED,
            )
            .await
            .unwrap();
    }

    let pending = queue.pending_jobs();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].run_at, 1_700_000_450, "only the last call's run_at survives");
}

#[tokio::test]
async fn test_structurally_equal_args_collide_regardless_of_member_order() {
    let queue = Arc::new(InMemoryJobQueue::new());
    let dispatcher = dispatcher(queue.clone());

    dispatcher
        .schedule(
            1_700_000_000,
            "track_new_order",
            JobArgs::new(serde_json::json!({ "order_id": 42, "source": "checkout" })),
            UNGROUPED,
        )
        .await
        .unwrap();
    dispatcher
        .schedule(
            1_700_000_500,
            "track_new_order",
            JobArgs::new(serde_json::json!({ "source": "checkout", "order_id": 42 })),
            UNGROUPED,
        )
        .await
        .unwrap();

    assert_eq!(queue.pending_count(), 1, "matching is structural on the full payload");
}

#[tokio::test]
async fn test_empty_args_default_collides_with_itself() {
    let queue = Arc::new(InMemoryJobQueue::new());
    let dispatcher = dispatcher(queue.clone());

    dispatcher
        .schedule(1_700_000_000, "track_new_order", JobArgs::empty(), UNGROUPED)
        .await
        .unwrap();
    dispatcher
        .schedule(1_700_000_500, "track_new_order", JobArgs::empty(), UNGROUPED)
        .await
        .unwrap();

    assert_eq!(queue.pending_count(), 1);
}
