//! Redis Cache - A typed cache wrapper over a Redis-style key-value store
//!
//! Stores scalar values under random keys, reads them back with optional
//! conversion, and records call counts and call history for replay.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod instrument;

pub use backend::{KeyValueStore, MemoryStore, RedisStore};
pub use cache::{Cache, Value};
pub use config::Config;
pub use error::{CacheError, Result};
