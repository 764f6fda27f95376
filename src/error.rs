//! Error types for the cache wrapper
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache wrapper.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The store client could not be created or connected
    #[error("Connection failed: {0}")]
    Connection(String),

    /// A store command failed (wrong type, non-integer increment, I/O)
    #[error("Store error: {0}")]
    Store(String),

    /// A retrieved value could not be converted to the requested type
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

// == Redis Error Conversion ==
impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Store(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache wrapper.
pub type Result<T> = std::result::Result<T, CacheError>;
