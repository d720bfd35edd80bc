use std::fmt;

use thiserror::Error;

/// An error returned by an external provider.
///
/// Carries the provider's machine-readable error code, which the session layer maps
/// to a user-facing message. The raw code and message are logged but never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ProviderError {
    /// Machine-readable error code.
    pub code: AuthErrorCode,
    /// Provider-supplied detail.
    pub message: String,
}

impl ProviderError {
    /// Constructs a new `ProviderError` from a code and detail message.
    pub fn new(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Error codes reported by the identity provider.
///
/// Codes without a dedicated variant are preserved in [`AuthErrorCode::Other`] so they
/// can still be logged verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorCode {
    /// No account exists for the given email.
    UserNotFound,
    /// The password did not match the account.
    WrongPassword,
    /// The credential pair was rejected without further detail.
    InvalidCredential,
    /// The email address is malformed.
    InvalidEmail,
    /// An account already exists for the given email.
    EmailAlreadyInUse,
    /// The password does not meet the provider's minimum requirements.
    WeakPassword,
    /// The provider throttled the request.
    TooManyRequests,
    /// Any other provider code, preserved verbatim.
    Other(String),
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserNotFound => write!(f, "user-not-found"),
            Self::WrongPassword => write!(f, "wrong-password"),
            Self::InvalidCredential => write!(f, "invalid-credential"),
            Self::InvalidEmail => write!(f, "invalid-email"),
            Self::EmailAlreadyInUse => write!(f, "email-already-in-use"),
            Self::WeakPassword => write!(f, "weak-password"),
            Self::TooManyRequests => write!(f, "too-many-requests"),
            Self::Other(code) => write!(f, "{code}"),
        }
    }
}
