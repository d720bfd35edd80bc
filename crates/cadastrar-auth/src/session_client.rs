use std::sync::{Arc, RwLock};

use cadastrar_core::{
    AuthStateSubscription, Client, PersistenceMode, ProviderError, UserRef,
};

use crate::{
    error::{LoginError, LogoutError, PasswordResetError, SignupError, VerificationError},
    models::{AuthSessionState, Credentials, LoginOptions, SignupCredentials, UserProfileRecord},
};

/// Session controller over the external identity provider.
///
/// Owns the auth-state subscription for its whole lifetime: the subscription is
/// registered on construction and released exactly once when the client is dropped.
/// The first provider notification transitions the state out of its initial loading
/// phase, whether or not a user is present.
///
/// Construct one per application and inject it into the composition root; callers
/// must not issue two login/signup calls concurrently on the same instance (the UI
/// layer disables duplicate submissions while [`AuthSessionState::is_loading`] is
/// true).
pub struct SessionClient {
    client: Client,
    state: Arc<RwLock<AuthSessionState>>,
    _subscription: AuthStateSubscription,
}

impl SessionClient {
    /// Creates a session client and subscribes to the provider's auth-state changes.
    pub fn new(client: Client) -> Self {
        let state = Arc::new(RwLock::new(AuthSessionState::default()));

        let callback_state = state.clone();
        let subscription =
            client
                .internal
                .identity()
                .subscribe_auth_state(Box::new(move |user| {
                    // Field-targeted write: a notification must not clobber an error
                    // set by a concurrently finishing operation.
                    let mut state = callback_state.write().expect("RwLock is not poisoned");
                    state.user = user;
                    state.is_loading = false;
                }));

        Self {
            client,
            state,
            _subscription: subscription,
        }
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> AuthSessionState {
        self.state.read().expect("RwLock is not poisoned").clone()
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .expect("RwLock is not poisoned")
            .user
            .is_some()
    }

    /// Clears the error field. No other side effects.
    pub fn clear_error(&self) {
        self.state.write().expect("RwLock is not poisoned").error = None;
    }

    /// Signs in with the given credentials.
    ///
    /// Selects the persistence mode from `options.remember_me` before the credential
    /// exchange. Returns the provider's user reference on success; the session state
    /// itself updates through the auth-state subscription, not through this return
    /// value. On failure returns `None` and sets a mapped user-facing error.
    pub async fn login(
        &self,
        credentials: &Credentials,
        options: &LoginOptions,
    ) -> Option<UserRef> {
        self.begin_operation();

        let result = self.login_inner(credentials, options).await;
        let user = match result {
            Ok(user) => Some(user),
            Err(error) => {
                log::warn!("login failed: {error}");
                self.set_error(LoginError::from(&error.code).to_string());
                None
            }
        };

        self.finish_operation();
        user
    }

    async fn login_inner(
        &self,
        credentials: &Credentials,
        options: &LoginOptions,
    ) -> Result<UserRef, ProviderError> {
        let identity = self.client.internal.identity();

        identity
            .set_persistence_mode(PersistenceMode::from(options.remember_me))
            .await?;

        identity
            .sign_in(&credentials.email, &credentials.password)
            .await
    }

    /// Creates an account, provisions its profile record and sends a verification
    /// email.
    ///
    /// A failure after the account was created (profile write, verification send) is
    /// reported as an error but does not roll the account back; re-authentication
    /// remains possible.
    pub async fn signup(
        &self,
        credentials: &SignupCredentials,
        options: &LoginOptions,
    ) -> Option<UserRef> {
        self.begin_operation();

        let result = self.signup_inner(credentials, options).await;
        let user = match result {
            Ok(user) => Some(user),
            Err(error) => {
                log::warn!("signup failed: {error}");
                self.set_error(SignupError::from(&error.code).to_string());
                None
            }
        };

        self.finish_operation();
        user
    }

    async fn signup_inner(
        &self,
        credentials: &SignupCredentials,
        options: &LoginOptions,
    ) -> Result<UserRef, ProviderError> {
        let identity = self.client.internal.identity();

        identity
            .set_persistence_mode(PersistenceMode::from(options.remember_me))
            .await?;

        let user = identity
            .create_account(&credentials.email, &credentials.password)
            .await?;

        identity
            .update_display_name(&user, &credentials.display_name)
            .await?;

        let record = UserProfileRecord::new(&credentials.display_name, &credentials.email);
        let fields = serde_json::to_value(&record).map_err(|e| {
            ProviderError::new(
                cadastrar_core::AuthErrorCode::Other("profile-serialization".into()),
                e.to_string(),
            )
        })?;
        self.client
            .internal
            .documents()
            .write_document(
                &self.client.internal.settings().users_collection,
                &user.uid,
                fields,
            )
            .await?;

        identity.send_verification_email(&user).await?;

        Ok(user)
    }

    /// Signs out of the current session. Failures surface through the error field
    /// and never propagate past this boundary.
    pub async fn logout(&self) {
        self.begin_operation();

        if let Err(error) = self.client.internal.identity().sign_out().await {
            log::warn!("logout failed: {error}");
            self.set_error(LogoutError::SignOutFailed.to_string());
        }

        self.finish_operation();
    }

    /// Resends the verification email for the current user.
    ///
    /// Returns false without contacting the provider when no user is signed in.
    pub async fn resend_verification_email(&self) -> bool {
        self.begin_operation();

        let current_user = self
            .state
            .read()
            .expect("RwLock is not poisoned")
            .user
            .clone();

        let sent = match current_user {
            None => {
                self.set_error(VerificationError::NoUserLoggedIn.to_string());
                false
            }
            Some(user) => match self
                .client
                .internal
                .identity()
                .send_verification_email(&user)
                .await
            {
                Ok(()) => true,
                Err(error) => {
                    log::warn!("verification email failed: {error}");
                    self.set_error(VerificationError::SendFailed.to_string());
                    false
                }
            },
        };

        self.finish_operation();
        sent
    }

    /// Sends a password reset email to the given address. Returns true on success.
    pub async fn send_password_reset_email(&self, email: &str) -> bool {
        self.begin_operation();

        let sent = match self
            .client
            .internal
            .identity()
            .send_password_reset_email(email)
            .await
        {
            Ok(()) => true,
            Err(error) => {
                log::warn!("password reset failed: {error}");
                self.set_error(PasswordResetError::from(&error.code).to_string());
                false
            }
        };

        self.finish_operation();
        sent
    }

    /// Marks an operation as in flight and clears the previous error.
    fn begin_operation(&self) {
        let mut state = self.state.write().expect("RwLock is not poisoned");
        state.is_loading = true;
        state.error = None;
    }

    /// Runs on every operation exit path. Only touches `is_loading`, so a fresher
    /// subscription notification is never overwritten (last write wins per field).
    fn finish_operation(&self) {
        self.state
            .write()
            .expect("RwLock is not poisoned")
            .is_loading = false;
    }

    fn set_error(&self, message: String) {
        self.state.write().expect("RwLock is not poisoned").error = Some(message);
    }
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("state", &self.state())
            .finish()
    }
}
