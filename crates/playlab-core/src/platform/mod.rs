mod catalog_client;
mod storage_client;

pub use catalog_client::{CatalogClient, CatalogClientExt};
pub use storage_client::{StorageClient, StorageClientExt};
