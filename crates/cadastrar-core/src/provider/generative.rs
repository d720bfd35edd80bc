use super::error::ProviderError;

/// External generative text service. Optional; the client may be constructed without
/// one, in which case features built on it report themselves as not configured.
#[async_trait::async_trait]
pub trait GenerativeTextProvider: Send + Sync {
    /// Produces a text completion for the given prompt.
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError>;
}
