//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

/// Which key-value store backs the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// A Redis server reached through `redis_url`
    Redis,
    /// An in-process store, lost on exit
    Memory,
}

/// How the binary prints the replay transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayFormat {
    Text,
    Json,
}

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL
    pub redis_url: String,
    /// Store backend selection
    pub backend: Backend,
    /// Output format for replay transcripts
    pub replay_format: ReplayFormat,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis connection URL (default: redis://127.0.0.1:6379/)
    /// - `CACHE_BACKEND` - `redis` or `memory` (default: redis)
    /// - `REPLAY_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            backend: env::var("CACHE_BACKEND")
                .ok()
                .and_then(|v| parse_backend(&v))
                .unwrap_or(defaults.backend),
            replay_format: env::var("REPLAY_FORMAT")
                .ok()
                .and_then(|v| parse_replay_format(&v))
                .unwrap_or(defaults.replay_format),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379/".to_string(),
            backend: Backend::Redis,
            replay_format: ReplayFormat::Text,
        }
    }
}

fn parse_backend(value: &str) -> Option<Backend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "redis" => Some(Backend::Redis),
        "memory" => Some(Backend::Memory),
        _ => None,
    }
}

fn parse_replay_format(value: &str) -> Option<ReplayFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Some(ReplayFormat::Text),
        "json" => Some(ReplayFormat::Json),
        _ => None,
    }
}
