use std::sync::Arc;

use super::internal::InternalClient;
use crate::{
    client::client_settings::ClientSettings,
    provider::{DocumentStore, GenerativeTextProvider, IdentityProvider},
};

/// The main struct to interact with the CadastRAR SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so any mutable state needs to live behind the Arc as part
    // of the [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new CadastRAR client over the given external providers.
    pub fn new(
        settings: Option<ClientSettings>,
        identity: Arc<dyn IdentityProvider>,
        documents: Arc<dyn DocumentStore>,
    ) -> Self {
        Self::new_internal(settings, identity, documents, None)
    }

    /// Create a new CadastRAR client with a generative text provider configured.
    pub fn new_with_generative(
        settings: Option<ClientSettings>,
        identity: Arc<dyn IdentityProvider>,
        documents: Arc<dyn DocumentStore>,
        generative: Arc<dyn GenerativeTextProvider>,
    ) -> Self {
        Self::new_internal(settings, identity, documents, Some(generative))
    }

    fn new_internal(
        settings_input: Option<ClientSettings>,
        identity: Arc<dyn IdentityProvider>,
        documents: Arc<dyn DocumentStore>,
        generative: Option<Arc<dyn GenerativeTextProvider>>,
    ) -> Self {
        let settings = settings_input.unwrap_or_default();

        Self {
            internal: Arc::new(InternalClient {
                settings,
                identity,
                documents,
                generative,
            }),
        }
    }
}
