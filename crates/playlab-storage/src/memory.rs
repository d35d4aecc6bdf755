use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::backend::{BackendKind, StoreBackend, StoreError};

/// In-memory plain backend. Nothing persists past the process; used by demos
/// and tests where a real on-device store is not wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StoreBackend for MemoryStore {
    async fn get(&self, key: String) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: String, value: String) -> Result<(), StoreError> {
        self.values.write().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: String) -> Result<(), StoreError> {
        self.values.write().await.remove(&key);
        Ok(())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Plain
    }
}
