#![doc = include_str!("../README.md")]

/// This module provides the generic backend interface for storing and retrieving values.
pub mod backend;

/// This module provides the reactive cell binding one backend and key to an observable value.
pub mod cell;

/// Type-safe keys for cell storage.
pub mod key;

mod memory;
mod secure;
mod sqlite;

pub use backend::{BackendKind, StoreBackend, StoreError};
pub use cell::{CellState, Snapshot, ValueCell};
pub use key::StoreKey;
pub use memory::MemoryStore;
pub use secure::{Keychain, KeychainError, SecureStore};
pub use sqlite::SqliteStore;
