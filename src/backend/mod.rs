//! Backend Module
//!
//! The key-value store contract the cache delegates to, plus its Redis and
//! in-process implementations.

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use crate::error::Result;

// == Key Value Store ==
/// Minimal key-value and list store the cache is built on.
///
/// Every call is synchronous and blocking. Implementations are expected to make
/// `incr` and `rpush` atomic per call; nothing else relies on atomicity.
pub trait KeyValueStore {
    /// Overwrites or creates `key` with `value`.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Point lookup. Returns `None` when the key does not exist.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Increments the integer at `key` by one, creating it at 0 first if absent.
    ///
    /// Returns the value after the increment.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// Appends `value` to the list at `key` and returns the new list length.
    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize>;

    /// Returns the inclusive range `start..=stop` of the list at `key`.
    ///
    /// Negative indices count from the end, so `lrange(key, 0, -1)` reads the
    /// whole list. A missing key reads as an empty list.
    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>>;

    /// Removes every key.
    fn flushdb(&mut self) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        (**self).incr(key)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        (**self).rpush(key, value)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        (**self).lrange(key, start, stop)
    }

    fn flushdb(&mut self) -> Result<()> {
        (**self).flushdb()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        (**self).incr(key)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        (**self).rpush(key, value)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        (**self).lrange(key, start, stop)
    }

    fn flushdb(&mut self) -> Result<()> {
        (**self).flushdb()
    }
}
