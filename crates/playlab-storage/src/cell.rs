//! The reactive value cell: one persisted value, observable by UI.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, RwLock,
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::watch;

use crate::backend::{StoreBackend, StoreError};

/// Lifecycle of the value held by a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellState {
    /// No operation has run yet.
    Idle,
    /// A load is in flight.
    Loading,
    /// The value reflects the most recent successful operation.
    Ready,
    /// The most recent operation failed; the error is kept here.
    Failed(StoreError),
}

impl CellState {
    /// The error of the most recent failed operation, if the cell is failed.
    pub fn last_error(&self) -> Option<&StoreError> {
        match self {
            CellState::Failed(err) => Some(err),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    pub fn is_loading(&self) -> bool {
        matches!(self, CellState::Loading)
    }

    #[allow(missing_docs)]
    pub fn is_ready(&self) -> bool {
        matches!(self, CellState::Ready)
    }
}

/// The projection a cell publishes to its observers.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Current known value; the caller-supplied fallback when absent.
    pub value: T,
    /// Lifecycle state, carrying the last error when failed.
    pub state: CellState,
}

/// A reactive wrapper binding one backend and one key to an observable value
/// projection.
///
/// The cell serializes values to JSON for storage and publishes every state
/// transition through a watch channel, so UI re-renders whenever the
/// projection changes. Operations never panic the process: failures are
/// captured into the published [`CellState`].
///
/// Every operation takes a token from a monotonically increasing counter; a
/// completion whose token has been superseded is discarded without touching
/// the projection. Superseded backend calls are not aborted, their results
/// simply never surface.
///
/// # Example
/// ```rust,ignore
/// let cell = ValueCell::open(backend, "auth_token", String::new()).await;
/// if cell.save("abc123".to_string()).await {
///     assert_eq!(cell.value(), "abc123");
/// }
/// ```
pub struct ValueCell<T> {
    backend: Arc<dyn StoreBackend>,
    fallback: T,
    key: RwLock<String>,
    token: AtomicU64,
    tx: watch::Sender<Snapshot<T>>,
}

impl<T> ValueCell<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Creates a cell bound to `key` on `backend` without performing I/O.
    ///
    /// The projection starts at `(fallback, Idle)`. If the backend is
    /// unavailable the cell starts failed instead, and no operation will
    /// ever reach the backend.
    pub fn new(backend: Arc<dyn StoreBackend>, key: impl Into<String>, fallback: T) -> Self {
        let state = if backend.is_available() {
            CellState::Idle
        } else {
            CellState::Failed(StoreError::Unavailable)
        };
        let (tx, _) = watch::channel(Snapshot {
            value: fallback.clone(),
            state,
        });
        Self {
            backend,
            fallback,
            key: RwLock::new(key.into()),
            token: AtomicU64::new(0),
            tx,
        }
    }

    /// Creates a cell and runs the initial load, the load-on-mount entry
    /// point for UI that observes a persisted value.
    pub async fn open(backend: Arc<dyn StoreBackend>, key: impl Into<String>, fallback: T) -> Self {
        let cell = Self::new(backend, key, fallback);
        if cell.backend.is_available() {
            cell.load().await;
        }
        cell
    }

    /// The key the cell is currently bound to.
    pub fn key(&self) -> String {
        self.key
            .read()
            .expect("RwLock should not be poisoned")
            .clone()
    }

    /// The fallback value used when nothing is stored.
    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// The current projection.
    pub fn snapshot(&self) -> Snapshot<T> {
        self.tx.borrow().clone()
    }

    /// The current known value.
    pub fn value(&self) -> T {
        self.tx.borrow().value.clone()
    }

    /// The current lifecycle state.
    pub fn state(&self) -> CellState {
        self.tx.borrow().state.clone()
    }

    /// Subscribes to projection changes.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }

    /// Reads the stored value into the projection.
    ///
    /// Transitions through `Loading`. An absent key resolves to the fallback
    /// value and `Ready`; an undecodable stored value resolves to the
    /// fallback and `Failed(Parse)`; a backend failure leaves the value
    /// untouched. Safe to call repeatedly: the most recent call's result is
    /// authoritative and earlier in-flight results are discarded.
    pub async fn load(&self) {
        if !self.backend.is_available() {
            self.fail_unavailable();
            return;
        }

        let token = self.begin();
        let key = self.key();
        self.publish(token, |snapshot| snapshot.state = CellState::Loading);

        let applied = match self.backend.get(key.clone()).await {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => self.publish(token, |snapshot| {
                    snapshot.value = value;
                    snapshot.state = CellState::Ready;
                }),
                Err(err) => {
                    let fallback = self.fallback.clone();
                    self.publish(token, |snapshot| {
                        snapshot.value = fallback;
                        snapshot.state = CellState::Failed(StoreError::Parse(err.to_string()));
                    })
                }
            },
            Ok(None) => {
                let fallback = self.fallback.clone();
                self.publish(token, |snapshot| {
                    snapshot.value = fallback;
                    snapshot.state = CellState::Ready;
                })
            }
            Err(err) => self.publish(token, |snapshot| snapshot.state = CellState::Failed(err)),
        };

        if !applied {
            log::debug!("discarding superseded load result for key {key}");
        }
    }

    /// Re-reads the stored value; the pull-to-refresh re-entry point.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Writes `value` to the backend and, on success, into the projection.
    ///
    /// Returns whether the write succeeded so callers can react without
    /// waiting for projection propagation. On failure the projection keeps
    /// the previously known-good value; no partial write is ever visible.
    pub async fn save(&self, value: T) -> bool {
        if !self.backend.is_available() {
            self.fail_unavailable();
            return false;
        }

        let raw = match serde_json::to_string(&value) {
            Ok(raw) => raw,
            Err(err) => {
                let token = self.begin();
                self.publish(token, |snapshot| {
                    snapshot.state = CellState::Failed(StoreError::Parse(err.to_string()));
                });
                return false;
            }
        };

        let token = self.begin();
        let key = self.key();
        match self.backend.set(key.clone(), raw).await {
            Ok(()) => {
                let applied = self.publish(token, |snapshot| {
                    snapshot.value = value;
                    snapshot.state = CellState::Ready;
                });
                if !applied {
                    log::debug!("discarding superseded save result for key {key}");
                }
                true
            }
            Err(err) => {
                if !self.publish(token, |snapshot| snapshot.state = CellState::Failed(err)) {
                    log::debug!("discarding superseded save failure for key {key}");
                }
                false
            }
        }
    }

    /// Deletes the stored value and resets the projection to the fallback.
    ///
    /// Returns whether the delete succeeded. Deleting an absent key
    /// succeeds; the backend's `remove` is idempotent.
    pub async fn remove(&self) -> bool {
        if !self.backend.is_available() {
            self.fail_unavailable();
            return false;
        }

        let token = self.begin();
        let key = self.key();
        match self.backend.remove(key.clone()).await {
            Ok(()) => {
                let fallback = self.fallback.clone();
                let applied = self.publish(token, |snapshot| {
                    snapshot.value = fallback;
                    snapshot.state = CellState::Ready;
                });
                if !applied {
                    log::debug!("discarding superseded remove result for key {key}");
                }
                true
            }
            Err(err) => {
                if !self.publish(token, |snapshot| snapshot.state = CellState::Failed(err)) {
                    log::debug!("discarding superseded remove failure for key {key}");
                }
                false
            }
        }
    }

    /// Binds the cell to a new key and loads its value.
    ///
    /// Supersedes every in-flight operation before the swap, so a late
    /// result for the old key can never surface in the projection, then
    /// resets to `(fallback, Idle)` and issues the fresh load.
    pub async fn rebind(&self, key: impl Into<String>) {
        let token = self.begin();
        {
            let mut bound = self.key.write().expect("RwLock should not be poisoned");
            *bound = key.into();
        }
        let fallback = self.fallback.clone();
        self.publish(token, |snapshot| {
            snapshot.value = fallback;
            snapshot.state = CellState::Idle;
        });
        self.load().await;
    }

    /// Takes the next call token, superseding every earlier operation.
    fn begin(&self) -> u64 {
        self.token.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Applies `apply` to the projection unless `token` has been superseded.
    /// Returns whether the change was applied.
    fn publish(&self, token: u64, apply: impl FnOnce(&mut Snapshot<T>)) -> bool {
        let mut applied = false;
        self.tx.send_if_modified(|snapshot| {
            if self.token.load(Ordering::SeqCst) == token {
                apply(snapshot);
                applied = true;
            }
            applied
        });
        applied
    }

    fn fail_unavailable(&self) {
        let token = self.begin();
        self.publish(token, |snapshot| {
            snapshot.state = CellState::Failed(StoreError::Unavailable);
        });
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueCell")
            .field("key", &self.key)
            .field("snapshot", &*self.tx.borrow())
            .finish()
    }
}
