use cadastrar_core::Client;
use thiserror::Error;

/// Errors from profile description drafting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    /// The client was constructed without a generative text provider.
    #[error("Generative text provider not configured.")]
    NotConfigured,
    /// The provider failed to produce a completion.
    #[error("Failed to generate description. Please try again.")]
    Generation(String),
}

/// Subclient drafting profile descriptions for the registration form.
#[derive(Debug, Clone)]
pub struct DescriptionClient {
    client: Client,
}

impl DescriptionClient {
    /// Constructs a new `DescriptionClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Whether a generative text provider is available. The registration form hides
    /// the drafting action when this is false.
    pub fn is_configured(&self) -> bool {
        self.client.internal.generative().is_some()
    }

    /// Drafts a short profile description for `name` around the given interest tags.
    pub async fn generate_user_description(
        &self,
        name: &str,
        tags: &[String],
    ) -> Result<String, DescriptionError> {
        let provider = self
            .client
            .internal
            .generative()
            .ok_or(DescriptionError::NotConfigured)?;

        let text = provider
            .generate_text(&build_prompt(name, tags))
            .await
            .map_err(|e| DescriptionError::Generation(e.to_string()))?;

        Ok(text.trim().to_string())
    }
}

fn build_prompt(name: &str, tags: &[String]) -> String {
    format!(
        "Generate a professional and concise user profile description (2-3 sentences) \
         for a person named \"{name}\" with the following interests/tags: {}.\n\n\
         The description should be:\n\
         - Professional and friendly\n\
         - Highlight their interests naturally\n\
         - Be unique and personalized\n\
         - 50-100 words maximum\n\
         - Written in third person\n\n\
         Just provide the description text without any additional formatting or labels.",
        tags.join(", ")
    )
}

/// Extension trait for `Client` to provide access to the `DescriptionClient`.
pub trait DescriptionClientExt {
    /// Creates a new `DescriptionClient` instance.
    fn descriptions(&self) -> DescriptionClient;
}

impl DescriptionClientExt for Client {
    fn descriptions(&self) -> DescriptionClient {
        DescriptionClient::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cadastrar_core::{
        AuthStateCallback, AuthStateSubscription, DocumentStore, GenerativeTextProvider,
        IdentityProvider, PersistenceMode, ProviderError, UserRef,
    };

    use super::*;

    struct NullIdentity;

    #[async_trait::async_trait]
    impl IdentityProvider for NullIdentity {
        async fn set_persistence_mode(&self, _: PersistenceMode) -> Result<(), ProviderError> {
            Ok(())
        }
        async fn sign_in(&self, _: &str, _: &str) -> Result<UserRef, ProviderError> {
            unimplemented!("not used by description tests")
        }
        async fn create_account(&self, _: &str, _: &str) -> Result<UserRef, ProviderError> {
            unimplemented!("not used by description tests")
        }
        async fn update_display_name(&self, _: &UserRef, _: &str) -> Result<(), ProviderError> {
            Ok(())
        }
        async fn sign_out(&self) -> Result<(), ProviderError> {
            Ok(())
        }
        async fn send_verification_email(&self, _: &UserRef) -> Result<(), ProviderError> {
            Ok(())
        }
        async fn send_password_reset_email(&self, _: &str) -> Result<(), ProviderError> {
            Ok(())
        }
        fn subscribe_auth_state(&self, _: AuthStateCallback) -> AuthStateSubscription {
            AuthStateSubscription::new(|| {})
        }
    }

    struct NullDocuments;

    #[async_trait::async_trait]
    impl DocumentStore for NullDocuments {
        async fn write_document(
            &self,
            _: &str,
            _: &str,
            _: serde_json::Value,
        ) -> Result<(), ProviderError> {
            Ok(())
        }
    }

    struct EchoGenerative;

    #[async_trait::async_trait]
    impl GenerativeTextProvider for EchoGenerative {
        async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
            assert!(prompt.contains("\"Alice\""));
            assert!(prompt.contains("rust, hiking"));
            Ok("  A generated description.  ".to_string())
        }
    }

    #[tokio::test]
    async fn unconfigured_client_reports_not_configured() {
        let client = Client::new(None, Arc::new(NullIdentity), Arc::new(NullDocuments));
        let descriptions = client.descriptions();

        assert!(!descriptions.is_configured());
        let result = descriptions
            .generate_user_description("Alice", &["rust".into()])
            .await;
        assert_eq!(result, Err(DescriptionError::NotConfigured));
    }

    #[tokio::test]
    async fn generates_and_trims_description() {
        let client = Client::new_with_generative(
            None,
            Arc::new(NullIdentity),
            Arc::new(NullDocuments),
            Arc::new(EchoGenerative),
        );
        let descriptions = client.descriptions();

        assert!(descriptions.is_configured());
        let text = descriptions
            .generate_user_description("Alice", &["rust".into(), "hiking".into()])
            .await
            .expect("generation succeeds");
        assert_eq!(text, "A generated description.");
    }
}
