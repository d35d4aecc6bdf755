#![doc = include_str!("../README.md")]

mod keychain;
mod stores;

pub use keychain::MemoryKeychain;
pub use stores::{FailingStore, ManualOp, ManualStore};
