//! Narrow interfaces over the external collaborators of the SDK.
//!
//! The identity provider, document store and generative text service are consumed
//! through the traits in this module; concrete implementations are supplied by the
//! embedding application when constructing the [`Client`](crate::Client).

mod document_store;
mod error;
mod generative;
mod identity;

pub use document_store::{DocumentStore, ServerTimestamp, SERVER_TIMESTAMP_MARKER};
pub use error::{AuthErrorCode, ProviderError};
pub use generative::GenerativeTextProvider;
pub use identity::{
    AuthStateCallback, AuthStateSubscription, IdentityProvider, PersistenceMode, UserRef,
};
