//! Redis Store Module
//!
//! Synchronous Redis-backed implementation of the store contract.

use std::fmt;

use redis::{Client, Commands, Connection};
use tracing::info;

use crate::backend::KeyValueStore;
use crate::error::{CacheError, Result};

// == Redis Store ==
/// Store backed by a single blocking Redis connection.
pub struct RedisStore {
    connection: Connection,
    url: String,
}

impl fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore")
            .field("url", &self.url)
            .field("connection", &"<Connection>")
            .finish()
    }
}

impl RedisStore {
    // == Connect ==
    /// Opens a connection to the Redis server at `url`.
    ///
    /// Fails with [`CacheError::Connection`] if the URL is invalid or the
    /// server cannot be reached. There is no retry.
    pub fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url)
            .map_err(|e| CacheError::Connection(format!("Invalid Redis URL '{}': {}", url, e)))?;

        let connection = client.get_connection().map_err(|e| {
            CacheError::Connection(format!("Failed to connect to Redis at '{}': {}", url, e))
        })?;

        info!("Connected to Redis at {}", url);
        Ok(Self {
            connection,
            url: url.to_string(),
        })
    }
}

impl KeyValueStore for RedisStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let _: () = self.connection.set(key, value)?;
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.connection.get(key)?)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        Ok(self.connection.incr(key, 1)?)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        Ok(self.connection.rpush(key, value)?)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        Ok(self.connection.lrange(key, start, stop)?)
    }

    fn flushdb(&mut self) -> Result<()> {
        let _: () = redis::cmd("FLUSHDB").query(&mut self.connection)?;
        Ok(())
    }
}
