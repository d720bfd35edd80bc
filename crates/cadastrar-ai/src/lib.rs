#![doc = include_str!("../README.md")]

mod description_client;

pub use description_client::{DescriptionClient, DescriptionClientExt, DescriptionError};
