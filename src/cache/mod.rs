//! Cache Module
//!
//! Stores typed scalar values under random keys in a key-value store.

pub mod convert;
mod store;
mod value;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use store::{qualified_name, Cache};
pub use value::Value;
