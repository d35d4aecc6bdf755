use std::collections::HashMap;

use playlab_storage::{Keychain, KeychainError};
use tokio::sync::RwLock;

/// An in-memory [`Keychain`], so the secure backend can be exercised without
/// a platform keystore. Stores values unencrypted; tests only.
#[derive(Debug, Default)]
pub struct MemoryKeychain {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryKeychain {
    /// Creates an empty keychain.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Keychain for MemoryKeychain {
    async fn get(&self, key: String) -> Result<Option<String>, KeychainError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: String, value: String) -> Result<(), KeychainError> {
        self.values.write().await.insert(key, value);
        Ok(())
    }

    async fn delete(&self, key: String) -> Result<(), KeychainError> {
        self.values.write().await.remove(&key);
        Ok(())
    }
}
