use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use playlab_storage::{BackendKind, StoreBackend};
use thiserror::Error;

/// A registry holding the storage backend registered for each
/// [`BackendKind`]. Backends are registered by the host application at
/// startup; the registry only hands out shared references.
pub struct StoreRegistry {
    stores: RwLock<HashMap<BackendKind, Arc<dyn StoreBackend>>>,
}

impl std::fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRegistry").finish()
    }
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreRegistryError {
    #[error("no {0} backend has been registered")]
    NotRegistered(BackendKind),
}

impl StoreRegistry {
    /// Creates a new empty `StoreRegistry`.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        StoreRegistry {
            stores: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a backend under its kind, replacing any previous
    /// registration.
    pub fn register(&self, backend: Arc<dyn StoreBackend>) {
        self.stores
            .write()
            .expect("RwLock should not be poisoned")
            .insert(backend.kind(), backend);
    }

    /// Retrieves the backend registered for `kind`.
    pub fn get(&self, kind: BackendKind) -> Result<Arc<dyn StoreBackend>, StoreRegistryError> {
        self.stores
            .read()
            .expect("RwLock should not be poisoned")
            .get(&kind)
            .map(Arc::clone)
            .ok_or_else(|| {
                log::error!("no {kind} backend registered with the client");
                StoreRegistryError::NotRegistered(kind)
            })
    }
}

#[cfg(test)]
mod tests {
    use playlab_storage::{MemoryStore, SecureStore};

    use super::*;

    #[test]
    fn registered_backend_is_returned_by_kind() {
        let registry = StoreRegistry::new();
        registry.register(Arc::new(MemoryStore::new()));
        registry.register(Arc::new(SecureStore::unavailable()));

        assert_eq!(
            registry.get(BackendKind::Plain).map(|b| b.kind()),
            Ok(BackendKind::Plain)
        );
        assert_eq!(
            registry.get(BackendKind::Secure).map(|b| b.kind()),
            Ok(BackendKind::Secure)
        );
    }

    #[test]
    fn missing_backend_is_an_error() {
        let registry = StoreRegistry::new();
        assert_eq!(
            registry.get(BackendKind::Secure).map(|b| b.kind()),
            Err(StoreRegistryError::NotRegistered(BackendKind::Secure))
        );
    }

    #[test]
    fn last_registration_wins() {
        let registry = StoreRegistry::new();
        let first = Arc::new(MemoryStore::new());
        let second = Arc::new(MemoryStore::new());
        registry.register(first.clone());
        registry.register(second.clone());

        let stored = registry.get(BackendKind::Plain).expect("registered");
        let second: Arc<dyn StoreBackend> = second;
        assert!(Arc::ptr_eq(&stored, &second));
    }
}
