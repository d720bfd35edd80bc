use std::sync::Arc;

use crate::{
    client::ClientSettings,
    provider::{DocumentStore, GenerativeTextProvider, IdentityProvider},
};

/// The internal state of the [`Client`](crate::Client). Shared between all clones of a client
/// instance.
#[derive(Clone)]
pub struct InternalClient {
    pub(crate) settings: ClientSettings,
    pub(crate) identity: Arc<dyn IdentityProvider>,
    pub(crate) documents: Arc<dyn DocumentStore>,
    pub(crate) generative: Option<Arc<dyn GenerativeTextProvider>>,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("settings", &self.settings)
            .field("generative_configured", &self.generative.is_some())
            .finish()
    }
}

impl InternalClient {
    /// The settings this client was initialized with.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Handle to the external identity provider.
    pub fn identity(&self) -> Arc<dyn IdentityProvider> {
        self.identity.clone()
    }

    /// Handle to the external document store.
    pub fn documents(&self) -> Arc<dyn DocumentStore> {
        self.documents.clone()
    }

    /// Handle to the generative text provider, if one was configured.
    pub fn generative(&self) -> Option<Arc<dyn GenerativeTextProvider>> {
        self.generative.clone()
    }
}
