//! Cache Store Module
//!
//! Stores scalar values under generated keys and reads them back, delegating
//! all storage to a [`KeyValueStore`].

use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::{KeyValueStore, RedisStore};
use crate::cache::{convert, Value};
use crate::config::Config;
use crate::error::Result;

// == Qualified Name ==
/// Returns the qualified name of a `Cache` method, e.g. `"Cache.store"`.
///
/// Counters and history lists are keyed by this name.
pub fn qualified_name(method: &str) -> String {
    format!("Cache.{}", method)
}

// == Cache ==
/// Key-value cache with generated keys and typed accessors.
#[derive(Debug)]
pub struct Cache<S: KeyValueStore> {
    /// Backing store
    backend: S,
}

impl Cache<RedisStore> {
    // == Connect ==
    /// Connects to the Redis server named in `config` and flushes it.
    pub fn connect(config: &Config) -> Result<Self> {
        Self::new(RedisStore::connect(&config.redis_url)?)
    }
}

impl<S: KeyValueStore> Cache<S> {
    // == Constructor ==
    /// Creates a cache over `backend`, clearing every key it holds.
    ///
    /// The flush is unconditional: any pre-existing data in a shared store is
    /// destroyed.
    pub fn new(mut backend: S) -> Result<Self> {
        backend.flushdb()?;
        info!("Cache initialized, store flushed");
        Ok(Self { backend })
    }

    // == Store ==
    /// Writes `data` under a fresh random key and returns the key.
    pub fn store<V: Into<Value>>(&mut self, data: V) -> Result<String> {
        let value = data.into();
        let key = Uuid::new_v4().to_string();
        self.backend.set(&key, &value.to_bytes())?;
        debug!("Stored {} value under {}", value.kind(), key);
        Ok(key)
    }

    // == Retrieve ==
    /// Returns the raw bytes stored at `key`, or `None` if there are none.
    pub fn retrieve(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let raw = self.backend.get(key)?;
        debug!("Retrieved {} ({})", key, if raw.is_some() { "hit" } else { "absent" });
        Ok(raw)
    }

    /// Looks up `key` and passes the raw result, absent or not, to `converter`.
    pub fn retrieve_with<T, F>(&mut self, key: &str, converter: F) -> Result<T>
    where
        F: FnOnce(Option<Vec<u8>>) -> Result<T>,
    {
        converter(self.retrieve(key)?)
    }

    /// Retrieves the value at `key` decoded as UTF-8 text.
    pub fn retrieve_as_text(&mut self, key: &str) -> Result<String> {
        self.retrieve_with(key, convert::text)
    }

    /// Retrieves the value at `key` parsed as a base-10 integer.
    pub fn retrieve_as_integer(&mut self, key: &str) -> Result<i64> {
        self.retrieve_with(key, convert::integer)
    }

    /// Retrieves the value at `key` parsed as a float.
    pub fn retrieve_as_float(&mut self, key: &str) -> Result<f64> {
        self.retrieve_with(key, convert::float)
    }

    // == Backend Access ==
    /// Returns the backing store.
    ///
    /// Instrumentation writes its counters and history through here so they
    /// share the cache's connection.
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Consumes the cache and returns the backing store.
    pub fn into_backend(self) -> S {
        self.backend
    }
}
