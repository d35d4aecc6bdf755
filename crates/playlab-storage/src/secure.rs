use std::sync::Arc;

use crate::backend::{BackendKind, StoreBackend, StoreError};

/// An error reported by the host keychain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("keychain operation failed: {0}")]
pub struct KeychainError(pub String);

impl From<KeychainError> for StoreError {
    fn from(err: KeychainError) -> Self {
        StoreError::Io(err.0)
    }
}

/// The encrypted key-value capability supplied by the host platform
/// (Keychain Services on iOS, the Android Keystore elsewhere). The SDK never
/// implements encryption itself; it only adapts whatever the host provides.
#[async_trait::async_trait]
pub trait Keychain: Send + Sync {
    /// Retrieves the decrypted value stored under `key`, or `None` if absent.
    async fn get(&self, key: String) -> Result<Option<String>, KeychainError>;
    /// Encrypts and stores `value` under `key`.
    async fn set(&self, key: String, value: String) -> Result<(), KeychainError>;
    /// Deletes the value stored under `key`.
    async fn delete(&self, key: String) -> Result<(), KeychainError>;
}

/// The secure backend: a [`StoreBackend`] adapter over the host [`Keychain`].
///
/// Availability is fixed at construction. On hosts without a keychain use
/// [`SecureStore::unavailable`]; every operation then short-circuits into
/// [`StoreError::Unavailable`] without any I/O.
pub struct SecureStore {
    keychain: Option<Arc<dyn Keychain>>,
}

impl SecureStore {
    /// Creates an available secure store over the host keychain.
    pub fn new(keychain: Arc<dyn Keychain>) -> Self {
        Self {
            keychain: Some(keychain),
        }
    }

    /// The unsupported-host form: reports unavailable and performs no I/O.
    pub fn unavailable() -> Self {
        Self { keychain: None }
    }

    fn keychain(&self) -> Result<&Arc<dyn Keychain>, StoreError> {
        self.keychain.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl std::fmt::Debug for SecureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureStore")
            .field("available", &self.is_available())
            .finish()
    }
}

#[async_trait::async_trait]
impl StoreBackend for SecureStore {
    async fn get(&self, key: String) -> Result<Option<String>, StoreError> {
        Ok(self.keychain()?.get(key).await?)
    }

    async fn set(&self, key: String, value: String) -> Result<(), StoreError> {
        Ok(self.keychain()?.set(key, value).await?)
    }

    async fn remove(&self, key: String) -> Result<(), StoreError> {
        Ok(self.keychain()?.delete(key).await?)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Secure
    }

    fn is_available(&self) -> bool {
        self.keychain.is_some()
    }
}
