//! User-facing error mapping for session operations.
//!
//! Each enum's `Display` output is the exact message surfaced to the user. Raw
//! provider codes are logged at the call site but never displayed, and unmapped
//! codes always fall back to the generic variant rather than crashing the caller.

use cadastrar_core::AuthErrorCode;
use thiserror::Error;

/// User-facing login failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// No account exists for the given email.
    #[error("User not found.")]
    UserNotFound,
    /// Wrong password or otherwise rejected credential pair.
    #[error("Incorrect email or password.")]
    IncorrectCredentials,
    /// Malformed email address.
    #[error("Invalid email.")]
    InvalidEmail,
    /// Anything the mapping table does not cover.
    #[error("An error occurred, please try again later.")]
    Unexpected,
}

impl From<&AuthErrorCode> for LoginError {
    fn from(code: &AuthErrorCode) -> Self {
        match code {
            AuthErrorCode::UserNotFound => Self::UserNotFound,
            AuthErrorCode::WrongPassword | AuthErrorCode::InvalidCredential => {
                Self::IncorrectCredentials
            }
            AuthErrorCode::InvalidEmail => Self::InvalidEmail,
            _ => Self::Unexpected,
        }
    }
}

/// User-facing signup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// An account already exists for the given email.
    #[error("Email already registered.")]
    EmailAlreadyRegistered,
    /// The provider rejected the password as too weak.
    #[error("Password must be at least 6 characters.")]
    WeakPassword,
    /// Malformed email address.
    #[error("Invalid email.")]
    InvalidEmail,
    /// Anything the mapping table does not cover, including failures after the
    /// account itself was created.
    #[error("An error occurred, please try again later.")]
    Unexpected,
}

impl From<&AuthErrorCode> for SignupError {
    fn from(code: &AuthErrorCode) -> Self {
        match code {
            AuthErrorCode::EmailAlreadyInUse => Self::EmailAlreadyRegistered,
            AuthErrorCode::WeakPassword => Self::WeakPassword,
            AuthErrorCode::InvalidEmail => Self::InvalidEmail,
            _ => Self::Unexpected,
        }
    }
}

/// User-facing logout failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoutError {
    /// Sign-out request failed; the session may still be active.
    #[error("Error logging out.")]
    SignOutFailed,
}

/// User-facing verification email failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// A verification email needs an authenticated user.
    #[error("No user logged in.")]
    NoUserLoggedIn,
    /// The provider refused or failed to send the email.
    #[error("Error sending verification email.")]
    SendFailed,
}

/// User-facing password reset failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordResetError {
    /// No account exists for the given email.
    #[error("User not found.")]
    UserNotFound,
    /// Malformed email address.
    #[error("Invalid email.")]
    InvalidEmail,
    /// The provider throttled the request.
    #[error("Too many attempts. Please try again later.")]
    TooManyRequests,
    /// Anything the mapping table does not cover.
    #[error("An error occurred, please try again later.")]
    Unexpected,
}

impl From<&AuthErrorCode> for PasswordResetError {
    fn from(code: &AuthErrorCode) -> Self {
        match code {
            AuthErrorCode::UserNotFound => Self::UserNotFound,
            AuthErrorCode::InvalidEmail => Self::InvalidEmail,
            AuthErrorCode::TooManyRequests => Self::TooManyRequests,
            _ => Self::Unexpected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_mapping_covers_both_credential_codes() {
        assert_eq!(
            LoginError::from(&AuthErrorCode::WrongPassword),
            LoginError::IncorrectCredentials
        );
        assert_eq!(
            LoginError::from(&AuthErrorCode::InvalidCredential),
            LoginError::IncorrectCredentials
        );
    }

    #[test]
    fn unmapped_codes_fall_back_to_generic() {
        let code = AuthErrorCode::Other("network-request-failed".into());
        assert_eq!(LoginError::from(&code), LoginError::Unexpected);
        assert_eq!(SignupError::from(&code), SignupError::Unexpected);
        assert_eq!(PasswordResetError::from(&code), PasswordResetError::Unexpected);
    }

    #[test]
    fn signup_specific_codes_do_not_leak_into_login() {
        assert_eq!(
            LoginError::from(&AuthErrorCode::EmailAlreadyInUse),
            LoginError::Unexpected
        );
        assert_eq!(
            SignupError::from(&AuthErrorCode::EmailAlreadyInUse),
            SignupError::EmailAlreadyRegistered
        );
    }

    #[test]
    fn display_is_the_user_facing_message() {
        assert_eq!(LoginError::UserNotFound.to_string(), "User not found.");
        assert_eq!(
            SignupError::WeakPassword.to_string(),
            "Password must be at least 6 characters."
        );
        assert_eq!(LogoutError::SignOutFailed.to_string(), "Error logging out.");
        assert_eq!(
            VerificationError::NoUserLoggedIn.to_string(),
            "No user logged in."
        );
        assert_eq!(
            PasswordResetError::TooManyRequests.to_string(),
            "Too many attempts. Please try again later."
        );
    }
}
