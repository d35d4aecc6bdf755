use std::{path::Path, sync::Arc};

use playlab_storage::{
    BackendKind, Keychain, SecureStore, SqliteStore, StoreBackend, StoreError, StoreKey, ValueCell,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::StoreRegistryError, Client};

/// Wrapper for storage specific functionality.
pub struct StorageClient {
    client: Client,
}

impl StorageClient {
    fn new(client: Client) -> Self {
        Self { client }
    }

    /// Registers a backend under its kind, replacing any previous
    /// registration.
    pub fn register_store(&self, backend: Arc<dyn StoreBackend>) {
        self.client.internal.stores.register(backend);
    }

    /// Registers the built-in backends for the host described by the client
    /// settings: the sqlite-backed plain store at `db_path`, and a secure
    /// store over `keychain` on hosts that support one (the unavailable form
    /// otherwise).
    pub fn register_host_stores(
        &self,
        db_path: impl AsRef<Path>,
        keychain: Option<Arc<dyn Keychain>>,
    ) -> Result<(), StoreError> {
        self.register_store(Arc::new(SqliteStore::open(db_path)?));

        let device_type = self.client.internal.settings.device_type;
        let secure = match keychain {
            Some(keychain) if device_type.supports_secure_store() => SecureStore::new(keychain),
            _ => SecureStore::unavailable(),
        };
        self.register_store(Arc::new(secure));
        Ok(())
    }

    /// The backend registered for `kind`, if any.
    pub fn store(&self, kind: BackendKind) -> Result<Arc<dyn StoreBackend>, StoreRegistryError> {
        self.client.internal.stores.get(kind)
    }

    /// Mints a cell bound to `key` on the `kind` backend, without performing
    /// I/O.
    pub fn cell<T>(
        &self,
        kind: BackendKind,
        key: StoreKey<T>,
        fallback: T,
    ) -> Result<ValueCell<T>, StoreRegistryError>
    where
        T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    {
        Ok(ValueCell::new(self.store(kind)?, key.name(), fallback))
    }

    /// Mints a cell and runs the initial load; the load-on-mount entry point
    /// for UI that observes a persisted value.
    pub async fn open_cell<T>(
        &self,
        kind: BackendKind,
        key: StoreKey<T>,
        fallback: T,
    ) -> Result<ValueCell<T>, StoreRegistryError>
    where
        T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    {
        Ok(ValueCell::open(self.store(kind)?, key.name(), fallback).await)
    }
}

#[allow(missing_docs)]
pub trait StorageClientExt {
    fn storage(&self) -> StorageClient;
}

impl StorageClientExt for Client {
    fn storage(&self) -> StorageClient {
        StorageClient::new(self.clone())
    }
}
