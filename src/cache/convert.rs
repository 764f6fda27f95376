//! Converters for retrieved values.
//!
//! Each converter takes the raw lookup result, absent values included, and
//! either produces a typed value or fails with [`CacheError::TypeMismatch`].
//! Converting an absent value is always an error here; custom converters passed
//! to `Cache::retrieve_with` may choose otherwise.

use crate::error::{CacheError, Result};

fn require(raw: Option<Vec<u8>>, target: &str) -> Result<Vec<u8>> {
    raw.ok_or_else(|| CacheError::TypeMismatch(format!("cannot convert absent value to {}", target)))
}

/// Returns the raw bytes, failing only when the value is absent.
pub fn bytes(raw: Option<Vec<u8>>) -> Result<Vec<u8>> {
    require(raw, "bytes")
}

/// Decodes the raw bytes as UTF-8 text.
pub fn text(raw: Option<Vec<u8>>) -> Result<String> {
    String::from_utf8(require(raw, "text")?)
        .map_err(|e| CacheError::TypeMismatch(format!("value is not valid UTF-8: {}", e)))
}

/// Parses the raw bytes as a base-10 integer.
pub fn integer(raw: Option<Vec<u8>>) -> Result<i64> {
    let text = text(raw)?;
    text.trim()
        .parse()
        .map_err(|_| CacheError::TypeMismatch(format!("'{}' is not a base-10 integer", text)))
}

/// Parses the raw bytes as a floating-point number.
pub fn float(raw: Option<Vec<u8>>) -> Result<f64> {
    let text = text(raw)?;
    text.trim()
        .parse()
        .map_err(|_| CacheError::TypeMismatch(format!("'{}' is not a number", text)))
}
