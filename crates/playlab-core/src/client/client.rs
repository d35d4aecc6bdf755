use std::sync::Arc;

use super::{client_settings::ClientSettings, internal::InternalClient};

/// The main struct to interact with the PlayLab SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so every handle observes the same registries and session.
    // Any mutable state needs to live behind a lock inside [`InternalClient`].
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new PlayLab client. `None` uses the default settings.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        let settings = settings.unwrap_or_default();
        Self {
            internal: Arc::new(InternalClient::new(settings)),
        }
    }

    /// The settings the client was constructed with.
    pub fn settings(&self) -> &ClientSettings {
        &self.internal.settings
    }
}
