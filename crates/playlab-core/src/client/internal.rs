use std::sync::RwLock;

use playlab_catalog::Catalog;

use super::{client_settings::ClientSettings, store_registry::StoreRegistry};
use crate::session::Session;

/// State shared by every clone of a [`Client`](crate::Client).
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) settings: ClientSettings,
    pub(crate) stores: StoreRegistry,
    pub(crate) catalog: Catalog,
    pub(crate) session: RwLock<Session>,
}

impl InternalClient {
    pub(crate) fn new(settings: ClientSettings) -> Self {
        Self {
            settings,
            stores: StoreRegistry::new(),
            catalog: Catalog::builtin(),
            session: RwLock::new(Session::default()),
        }
    }
}
