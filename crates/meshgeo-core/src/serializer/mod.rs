//! Document serialization module
//!
//! Serializes the assembled [`GeometryDocument`](crate::GeometryDocument)
//! to its on-disk JSON representation.

pub mod json;

pub use json::{JsonOptions, JsonSerializer};
