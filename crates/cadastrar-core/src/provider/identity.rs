use serde::{Deserialize, Serialize};

use super::error::ProviderError;

/// Read-only projection of an authenticated identity, owned by the external provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    /// Provider-assigned stable identifier.
    pub uid: String,
    /// Account email address, if the provider exposes one.
    pub email: Option<String>,
    /// Display name, if one has been set.
    pub display_name: Option<String>,
    /// Whether the account email has been verified.
    pub email_verified: bool,
}

/// Whether a login session survives a browser restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersistenceMode {
    /// Session survives browser restarts.
    Durable,
    /// Session ends with the browser session.
    Ephemeral,
}

impl From<bool> for PersistenceMode {
    /// Maps a `remember_me` flag to the corresponding persistence mode.
    fn from(remember_me: bool) -> Self {
        if remember_me {
            Self::Durable
        } else {
            Self::Ephemeral
        }
    }
}

/// Callback invoked by the identity provider on every auth-state change.
///
/// Receives the current user, or `None` when signed out.
pub type AuthStateCallback = Box<dyn Fn(Option<UserRef>) + Send + Sync>;

/// Handle to an auth-state subscription.
///
/// Unsubscribes exactly once when dropped, so holding the handle scopes the
/// subscription to the owner's lifetime on every exit path.
pub struct AuthStateSubscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl AuthStateSubscription {
    /// Wraps an unsubscribe function into a scoped handle.
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl Drop for AuthStateSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for AuthStateSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStateSubscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// External identity provider consumed by the session layer.
///
/// Errors carry a provider [`AuthErrorCode`](super::AuthErrorCode) that the session
/// layer translates into user-facing messages.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Selects whether subsequent sign-ins produce a durable or ephemeral session.
    async fn set_persistence_mode(&self, mode: PersistenceMode) -> Result<(), ProviderError>;

    /// Exchanges credentials for an authenticated identity.
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRef, ProviderError>;

    /// Creates a new account with the given credentials.
    async fn create_account(&self, email: &str, password: &str) -> Result<UserRef, ProviderError>;

    /// Sets the display name on an existing account.
    async fn update_display_name(
        &self,
        user: &UserRef,
        display_name: &str,
    ) -> Result<(), ProviderError>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Sends a verification email to the given user.
    async fn send_verification_email(&self, user: &UserRef) -> Result<(), ProviderError>;

    /// Sends a password reset email to the given address.
    async fn send_password_reset_email(&self, email: &str) -> Result<(), ProviderError>;

    /// Registers a callback for auth-state changes.
    ///
    /// The provider must invoke the callback once with the current state as soon as it
    /// is known, and again on every subsequent change, until the returned handle is
    /// dropped.
    fn subscribe_auth_state(&self, callback: AuthStateCallback) -> AuthStateSubscription;
}
