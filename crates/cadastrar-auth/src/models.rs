use std::fmt;

use cadastrar_core::{ServerTimestamp, UserRef};
use serde::{Deserialize, Serialize};

/// Email and password pair submitted by a login form.
///
/// Transient; owned by the calling form until submission and never persisted. The
/// `Debug` impl redacts the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Plaintext password. Scrub with `cadastrar_crypto::scrub_password` once the
    /// operation has completed.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials plus the display name collected by the signup form.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    /// Account email address.
    pub email: String,
    /// Plaintext password, same handling as [`Credentials::password`].
    pub password: String,
    /// Display name for the new account.
    pub display_name: String,
}

impl fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Per-attempt login configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginOptions {
    /// When true the session survives browser restarts; otherwise it ends with the
    /// browser session.
    pub remember_me: bool,
}

/// Snapshot of the session state observed by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSessionState {
    /// The authenticated user, if any.
    pub user: Option<UserRef>,
    /// True until the first auth-state notification arrives, and while an operation
    /// is in flight.
    pub is_loading: bool,
    /// User-facing message from the last failed operation, if any.
    pub error: Option<String>,
}

impl Default for AuthSessionState {
    /// The state at process start, before the provider has reported anything.
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
            error: None,
        }
    }
}

/// Profile record provisioned in the document store at signup.
///
/// Timestamps are [`ServerTimestamp`] sentinels; the store resolves them against its
/// own clock when the document is written.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileRecord {
    /// Display name chosen at signup.
    pub display_name: String,
    /// Account email address.
    pub email: String,
    /// Always true; signup implies accepting the terms.
    pub terms_accepted: bool,
    /// When the terms were accepted.
    pub terms_accepted_at: ServerTimestamp,
    /// When the account was created.
    pub created_at: ServerTimestamp,
    /// Always false at creation; flipped by the verification flow.
    pub email_verified: bool,
}

impl UserProfileRecord {
    /// Builds the record written for a freshly created account.
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            terms_accepted: true,
            terms_accepted_at: ServerTimestamp,
            created_at: ServerTimestamp,
            email_verified: false,
        }
    }
}
