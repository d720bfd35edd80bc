#![doc = include_str!("../README.md")]

mod scrub;

pub use scrub::scrub_password;
