use std::fmt;

/// An error resulting from operations on a storage backend.
///
/// Errors are cloneable so a cell can keep the most recent one in its
/// published projection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend failed to read, write or delete.
    #[error("storage i/o failed: {0}")]
    Io(String),

    /// The backend is not supported on the current host.
    #[error("storage backend is not available on this host")]
    Unavailable,

    /// The stored representation could not be decoded into the expected
    /// typed value. Recoverable: the owning cell falls back to its fallback
    /// value.
    #[error("stored value could not be decoded: {0}")]
    Parse(String),
}

/// Which of the two persistence backends a store implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Unencrypted on-device key-value storage.
    Plain,
    /// Encrypted key-value storage, gated by host platform support.
    Secure,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Plain => write!(f, "plain"),
            BackendKind::Secure => write!(f, "secure"),
        }
    }
}

/// This trait represents a generic key-value storage backend. A value cell is
/// polymorphic over it, so either backend substitutes without changing cell
/// logic.
///
/// Contract: `remove` is idempotent, `set` is last-write-wins, and every
/// operation on an unavailable backend fails fast with
/// [`StoreError::Unavailable`] without performing I/O. Absent keys and stored
/// empty strings are distinct: `get` returns `Ok(None)` only for a key that
/// was never written or has been removed.
#[async_trait::async_trait]
pub trait StoreBackend: Send + Sync {
    /// Retrieves the value stored under `key`, or `None` if absent.
    async fn get(&self, key: String) -> Result<Option<String>, StoreError>;
    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: String, value: String) -> Result<(), StoreError>;
    /// Removes the value stored under `key`. Removing an absent key succeeds.
    async fn remove(&self, key: String) -> Result<(), StoreError>;

    /// Which backend this store implements.
    fn kind(&self) -> BackendKind;

    /// Whether the backend is usable on the current host. Plain backends are
    /// always available; the secure backend reports `false` on hosts without
    /// a keychain.
    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_kind_display() {
        assert_eq!(BackendKind::Plain.to_string(), "plain");
        assert_eq!(BackendKind::Secure.to_string(), "secure");
    }

    #[test]
    fn store_error_messages() {
        assert_eq!(
            StoreError::Io("disk full".into()).to_string(),
            "storage i/o failed: disk full"
        );
        assert_eq!(
            StoreError::Unavailable.to_string(),
            "storage backend is not available on this host"
        );
    }
}
