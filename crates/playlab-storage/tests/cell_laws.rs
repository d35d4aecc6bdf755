//! Behavioral laws of the value cell, staged deterministically with parked
//! backend operations.

use std::sync::Arc;

use playlab_storage::{
    BackendKind, CellState, MemoryStore, SecureStore, StoreError, ValueCell,
};
use playlab_test::{FailingStore, ManualOp, ManualStore, MemoryKeychain};

fn json(value: &str) -> String {
    serde_json::to_string(value).expect("strings always encode")
}

fn resolve_get(op: ManualOp, result: Result<Option<String>, StoreError>) {
    match op {
        ManualOp::Get { respond, .. } => {
            let _ = respond.send(result);
        }
        _ => panic!("expected a parked get"),
    }
}

fn resolve_set(op: ManualOp, result: Result<(), StoreError>) {
    match op {
        ManualOp::Set { respond, .. } => {
            let _ = respond.send(result);
        }
        _ => panic!("expected a parked set"),
    }
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let store = Arc::new(MemoryStore::new());

    let cell = ValueCell::open(store.clone(), "greeting", String::new()).await;
    assert!(cell.save("hello".to_string()).await);

    let fresh = ValueCell::open(store, "greeting", String::new()).await;
    assert_eq!(fresh.value(), "hello");
    assert_eq!(fresh.state(), CellState::Ready);
}

#[tokio::test]
async fn token_scenario() {
    // Key "token", fallback "": save, reload from a fresh cell, remove.
    let store = Arc::new(MemoryStore::new());

    let cell = ValueCell::open(store.clone(), "token", String::new()).await;
    assert!(cell.save("abc123".to_string()).await);
    assert_eq!(cell.value(), "abc123");
    assert_eq!(cell.state(), CellState::Ready);

    let fresh = ValueCell::open(store, "token", String::new()).await;
    assert_eq!(fresh.value(), "abc123");
    assert_eq!(fresh.state(), CellState::Ready);

    assert!(fresh.remove().await);
    assert_eq!(fresh.value(), "");
    assert_eq!(fresh.state(), CellState::Ready);
}

#[tokio::test]
async fn remove_then_load_yields_fallback() {
    let store = Arc::new(MemoryStore::new());
    let cell = ValueCell::open(store, "count", 7u32).await;

    assert!(cell.save(42).await);
    assert!(cell.remove().await);
    cell.load().await;

    assert_eq!(cell.value(), 7);
    assert_eq!(cell.state(), CellState::Ready);
}

#[tokio::test]
async fn remove_is_idempotent_at_the_cell() {
    let store = Arc::new(MemoryStore::new());
    let cell = ValueCell::open(store, "count", 0u32).await;

    assert!(cell.remove().await);
    assert_eq!(cell.state(), CellState::Ready);
    assert!(cell.remove().await);
    assert_eq!(cell.state(), CellState::Ready);
}

#[tokio::test]
async fn stored_empty_string_is_distinct_from_absent() {
    let store = Arc::new(MemoryStore::new());

    let cell = ValueCell::open(store.clone(), "nickname", "anonymous".to_string()).await;
    assert_eq!(cell.value(), "anonymous");

    assert!(cell.save(String::new()).await);
    let fresh = ValueCell::open(store, "nickname", "anonymous".to_string()).await;
    assert_eq!(fresh.value(), "");
    assert_eq!(fresh.state(), CellState::Ready);
}

#[tokio::test]
async fn rebinding_discards_the_in_flight_load() {
    let store = Arc::new(ManualStore::plain());
    let cell = Arc::new(ValueCell::new(store.clone(), "a", String::new()));

    let loader = cell.clone();
    let load_task = tokio::spawn(async move { loader.load().await });
    let op_a = store.next_op().await;
    assert_eq!(op_a.key(), "a");

    let rebinder = cell.clone();
    let rebind_task = tokio::spawn(async move { rebinder.rebind("b").await });
    let op_b = store.next_op().await;
    assert_eq!(op_b.key(), "b");

    // B's load resolves first; the projection now belongs to key "b".
    resolve_get(op_b, Ok(Some(json("value-b"))));
    rebind_task.await.expect("rebind task");
    assert_eq!(cell.value(), "value-b");
    assert_eq!(cell.state(), CellState::Ready);

    // A's result arrives late and must never surface.
    resolve_get(op_a, Ok(Some(json("value-a"))));
    load_task.await.expect("load task");
    assert_eq!(cell.value(), "value-b");
    assert_eq!(cell.state(), CellState::Ready);
    assert_eq!(cell.key(), "b");
}

#[tokio::test]
async fn last_call_wins_between_overlapping_saves() {
    let store = Arc::new(ManualStore::plain());
    let cell = Arc::new(ValueCell::new(store.clone(), "token", String::new()));

    let first = cell.clone();
    let first_task = tokio::spawn(async move { first.save("v1".to_string()).await });
    let op_v1 = store.next_op().await;

    let second = cell.clone();
    let second_task = tokio::spawn(async move { second.save("v2".to_string()).await });
    let op_v2 = store.next_op().await;

    // v2's backend call resolves before v1's.
    resolve_set(op_v2, Ok(()));
    assert!(second_task.await.expect("save v2 task"));
    assert_eq!(cell.value(), "v2");

    resolve_set(op_v1, Ok(()));
    // The write itself succeeded even though its projection update is stale.
    assert!(first_task.await.expect("save v1 task"));
    assert_eq!(cell.value(), "v2");
    assert_eq!(cell.state(), CellState::Ready);
}

#[tokio::test]
async fn slow_load_does_not_clobber_a_faster_save() {
    let store = Arc::new(ManualStore::plain());
    let cell = Arc::new(ValueCell::new(store.clone(), "theme", "system".to_string()));

    let loader = cell.clone();
    let load_task = tokio::spawn(async move { loader.load().await });
    let parked_load = store.next_op().await;

    let saver = cell.clone();
    let save_task = tokio::spawn(async move { saver.save("dark".to_string()).await });
    let parked_save = store.next_op().await;

    resolve_set(parked_save, Ok(()));
    assert!(save_task.await.expect("save task"));
    assert_eq!(cell.value(), "dark");

    resolve_get(parked_load, Ok(Some(json("light"))));
    load_task.await.expect("load task");
    assert_eq!(cell.value(), "dark");
}

#[tokio::test]
async fn loading_is_observable_while_a_load_is_parked() {
    let store = Arc::new(ManualStore::plain());
    let cell = Arc::new(ValueCell::new(store.clone(), "profile", String::new()));
    let rx = cell.subscribe();

    let loader = cell.clone();
    let load_task = tokio::spawn(async move { loader.load().await });
    let parked = store.next_op().await;
    assert_eq!(rx.borrow().state, CellState::Loading);

    resolve_get(parked, Ok(None));
    load_task.await.expect("load task");
    assert_eq!(rx.borrow().state, CellState::Ready);
}

#[tokio::test]
async fn unavailable_backend_never_sees_a_call() {
    let store = Arc::new(ManualStore::unavailable(BackendKind::Secure));
    let cell = ValueCell::new(store.clone(), "token", String::new());

    // Failed before any operation runs.
    assert_eq!(cell.state(), CellState::Failed(StoreError::Unavailable));
    assert_eq!(cell.state().last_error(), Some(&StoreError::Unavailable));

    cell.load().await;
    assert!(!cell.save("x".to_string()).await);
    assert!(!cell.remove().await);
    cell.refresh().await;

    assert_eq!(cell.state(), CellState::Failed(StoreError::Unavailable));
    assert_eq!(store.issued(), 0);
}

#[tokio::test]
async fn unavailable_secure_store_fails_at_construction() {
    let cell = ValueCell::open(
        Arc::new(SecureStore::unavailable()),
        "token",
        String::new(),
    )
    .await;
    assert_eq!(cell.state(), CellState::Failed(StoreError::Unavailable));
    assert_eq!(cell.value(), "");
}

#[tokio::test]
async fn failed_load_keeps_the_current_value() {
    let store = Arc::new(FailingStore::new(StoreError::Io("disk full".into())));
    let cell = ValueCell::new(store, "settings", "defaults".to_string());

    cell.load().await;
    assert_eq!(cell.value(), "defaults");
    assert_eq!(
        cell.state(),
        CellState::Failed(StoreError::Io("disk full".into()))
    );
}

#[tokio::test]
async fn failed_save_keeps_the_known_good_value() {
    let store = Arc::new(ManualStore::plain());
    let cell = Arc::new(ValueCell::new(store.clone(), "draft", String::new()));

    let saver = cell.clone();
    let ok_task = tokio::spawn(async move { saver.save("good".to_string()).await });
    resolve_set(store.next_op().await, Ok(()));
    assert!(ok_task.await.expect("save task"));

    let saver = cell.clone();
    let failing_task = tokio::spawn(async move { saver.save("bad".to_string()).await });
    resolve_set(
        store.next_op().await,
        Err(StoreError::Io("write failed".into())),
    );
    assert!(!failing_task.await.expect("save task"));

    assert_eq!(cell.value(), "good");
    assert_eq!(
        cell.state(),
        CellState::Failed(StoreError::Io("write failed".into()))
    );
}

#[tokio::test]
async fn secure_cell_round_trips_through_the_keychain() {
    let store = Arc::new(SecureStore::new(Arc::new(MemoryKeychain::new())));
    let cell = ValueCell::open(store, "token", String::new()).await;

    assert!(cell.save("s3cret".to_string()).await);
    cell.refresh().await;
    assert_eq!(cell.value(), "s3cret");
    assert_eq!(cell.state(), CellState::Ready);

    assert!(cell.remove().await);
    assert_eq!(cell.value(), "");
    assert_eq!(cell.state(), CellState::Ready);
}
