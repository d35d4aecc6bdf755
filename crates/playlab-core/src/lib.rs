#![doc = include_str!("../README.md")]

/// The PlayLab client and its construction.
pub mod client;

/// Client surfaces for storage, catalog and session functionality.
pub mod platform;

/// App-level session state: search, favorites, recently viewed labs.
pub mod session;

pub use client::{Client, ClientSettings, DeviceType};
