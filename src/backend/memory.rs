//! In-Memory Store Module
//!
//! HashMap-backed implementation of the store contract with Redis semantics
//! for type errors, integer increments and list ranges.

use std::collections::HashMap;

use tracing::debug;

use crate::backend::KeyValueStore;
use crate::error::{CacheError, Result};

const WRONGTYPE: &str =
    "WRONGTYPE Operation against a key holding the wrong kind of value";

// == Slot ==
/// What a single key holds.
#[derive(Debug, Clone)]
enum Slot {
    Scalar(Vec<u8>),
    List(Vec<Vec<u8>>),
}

// == Memory Store ==
/// In-process key-value store.
///
/// Data lives as long as the value does; there is no persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, Slot>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        // SET replaces lists too, like Redis
        self.entries.insert(key.to_string(), Slot::Scalar(value.to_vec()));
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.entries.get(key) {
            Some(Slot::Scalar(value)) => Ok(Some(value.clone())),
            Some(Slot::List(_)) => Err(CacheError::Store(WRONGTYPE.to_string())),
            None => Ok(None),
        }
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        let slot = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Slot::Scalar(b"0".to_vec()));

        let Slot::Scalar(raw) = slot else {
            return Err(CacheError::Store(WRONGTYPE.to_string()));
        };

        let current = std::str::from_utf8(raw.as_slice())
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| {
                CacheError::Store("ERR value is not an integer or out of range".to_string())
            })?;
        let next = current.checked_add(1).ok_or_else(|| {
            CacheError::Store("ERR increment or decrement would overflow".to_string())
        })?;

        *raw = next.to_string().into_bytes();
        debug!("incr {} -> {}", key, next);
        Ok(next)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        let slot = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Slot::List(Vec::new()));

        match slot {
            Slot::List(items) => {
                items.push(value.to_vec());
                Ok(items.len())
            }
            Slot::Scalar(_) => Err(CacheError::Store(WRONGTYPE.to_string())),
        }
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        let items = match self.entries.get(key) {
            Some(Slot::List(items)) => items,
            Some(Slot::Scalar(_)) => return Err(CacheError::Store(WRONGTYPE.to_string())),
            None => return Ok(Vec::new()),
        };

        Ok(match list_bounds(items.len(), start, stop) {
            Some((from, to)) => items[from..=to].to_vec(),
            None => Vec::new(),
        })
    }

    fn flushdb(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

// == Range Resolution ==
/// Resolves Redis-style inclusive indices against a list of `len` items.
///
/// Returns `None` when the range selects nothing.
fn list_bounds(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    let start = if start < 0 { (start + len).max(0) } else { start };
    let stop = if stop < 0 { stop + len } else { stop.min(len - 1) };

    if start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}
