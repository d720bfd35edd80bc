#![doc = include_str!("../README.md")]

mod error;
mod models;
mod session_client;

pub use error::{LoginError, LogoutError, PasswordResetError, SignupError, VerificationError};
pub use models::{
    AuthSessionState, Credentials, LoginOptions, SignupCredentials, UserProfileRecord,
};
pub use session_client::SessionClient;
