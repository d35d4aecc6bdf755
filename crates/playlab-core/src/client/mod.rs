#[allow(clippy::module_inception)]
mod client;
mod client_settings;
mod internal;
mod store_registry;

pub use client::Client;
pub use client_settings::{ClientSettings, DeviceType};
pub use internal::InternalClient;
pub use store_registry::{StoreRegistry, StoreRegistryError};
