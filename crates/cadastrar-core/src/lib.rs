#![doc = include_str!("../README.md")]

pub mod client;
pub mod provider;

pub use client::{Client, ClientSettings};
pub use provider::{
    AuthErrorCode, AuthStateCallback, AuthStateSubscription, DocumentStore, GenerativeTextProvider,
    IdentityProvider, PersistenceMode, ProviderError, ServerTimestamp, UserRef,
};
