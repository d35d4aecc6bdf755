use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use playlab_storage::{BackendKind, StoreBackend, StoreError};
use tokio::sync::{oneshot, Notify};

/// A backend operation parked inside a [`ManualStore`], waiting for the test
/// to resolve it.
#[allow(missing_docs)]
pub enum ManualOp {
    Get {
        key: String,
        respond: oneshot::Sender<Result<Option<String>, StoreError>>,
    },
    Set {
        key: String,
        value: String,
        respond: oneshot::Sender<Result<(), StoreError>>,
    },
    Remove {
        key: String,
        respond: oneshot::Sender<Result<(), StoreError>>,
    },
}

impl ManualOp {
    /// The key the parked operation targets.
    pub fn key(&self) -> &str {
        match self {
            ManualOp::Get { key, .. } | ManualOp::Set { key, .. } | ManualOp::Remove { key, .. } => {
                key
            }
        }
    }
}

/// A backend whose operations complete only when the test resolves them.
///
/// Each `get`/`set`/`remove` parks as a [`ManualOp`] that the test collects
/// with [`next_op`](ManualStore::next_op) and resolves in whatever order the
/// scenario needs, which makes races like a slow load overlapping a fast
/// save deterministic to stage.
pub struct ManualStore {
    kind: BackendKind,
    available: bool,
    ops: Mutex<VecDeque<ManualOp>>,
    notify: Notify,
    issued: AtomicUsize,
}

impl ManualStore {
    /// A manual plain backend.
    pub fn plain() -> Self {
        Self::build(BackendKind::Plain, true)
    }

    /// A manual secure backend.
    pub fn secure() -> Self {
        Self::build(BackendKind::Secure, true)
    }

    /// A manual backend that reports itself unavailable. Operations that
    /// reach it anyway fail fast with [`StoreError::Unavailable`], and
    /// [`issued`](ManualStore::issued) counts them.
    pub fn unavailable(kind: BackendKind) -> Self {
        Self::build(kind, false)
    }

    fn build(kind: BackendKind, available: bool) -> Self {
        Self {
            kind,
            available,
            ops: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
            issued: AtomicUsize::new(0),
        }
    }

    /// Waits for the next parked operation.
    pub async fn next_op(&self) -> ManualOp {
        loop {
            if let Some(op) = self
                .ops
                .lock()
                .expect("Mutex should not be poisoned")
                .pop_front()
            {
                return op;
            }
            self.notify.notified().await;
        }
    }

    /// How many operations have reached the backend, parked or resolved.
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    fn park(&self, op: ManualOp) {
        self.ops
            .lock()
            .expect("Mutex should not be poisoned")
            .push_back(op);
        self.notify.notify_one();
    }
}

#[async_trait::async_trait]
impl StoreBackend for ManualStore {
    async fn get(&self, key: String) -> Result<Option<String>, StoreError> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        let (respond, rx) = oneshot::channel();
        self.park(ManualOp::Get { key, respond });
        rx.await
            .unwrap_or(Err(StoreError::Io("manual op dropped".into())))
    }

    async fn set(&self, key: String, value: String) -> Result<(), StoreError> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        let (respond, rx) = oneshot::channel();
        self.park(ManualOp::Set { key, value, respond });
        rx.await
            .unwrap_or(Err(StoreError::Io("manual op dropped".into())))
    }

    async fn remove(&self, key: String) -> Result<(), StoreError> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        let (respond, rx) = oneshot::channel();
        self.park(ManualOp::Remove { key, respond });
        rx.await
            .unwrap_or(Err(StoreError::Io("manual op dropped".into())))
    }

    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// A backend where every operation fails with a fixed error.
pub struct FailingStore {
    kind: BackendKind,
    error: StoreError,
}

impl FailingStore {
    /// A failing plain backend.
    pub fn new(error: StoreError) -> Self {
        Self::with_kind(BackendKind::Plain, error)
    }

    /// A failing backend of the given kind.
    pub fn with_kind(kind: BackendKind, error: StoreError) -> Self {
        Self { kind, error }
    }
}

#[async_trait::async_trait]
impl StoreBackend for FailingStore {
    async fn get(&self, _key: String) -> Result<Option<String>, StoreError> {
        Err(self.error.clone())
    }

    async fn set(&self, _key: String, _value: String) -> Result<(), StoreError> {
        Err(self.error.clone())
    }

    async fn remove(&self, _key: String) -> Result<(), StoreError> {
        Err(self.error.clone())
    }

    fn kind(&self) -> BackendKind {
        self.kind
    }
}
