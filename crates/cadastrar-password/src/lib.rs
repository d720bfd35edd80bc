#![doc = include_str!("../README.md")]

mod security;
mod strength;

pub use security::check_security;
pub use strength::{evaluate, PasswordStrength, StrengthLabel};
