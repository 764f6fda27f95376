//! Redis Cache - demo driver
//!
//! Stores a few values through the instrumented `store` operation, reads them
//! back with the typed accessors and prints the replayed call history.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_cache::cache::qualified_name;
use redis_cache::config::{Backend, ReplayFormat};
use redis_cache::instrument::{call_history, count_calls, replay};
use redis_cache::{Cache, Config, KeyValueStore, MemoryStore, RedisStore, Value};

type DynCache = Cache<Box<dyn KeyValueStore>>;

/// Main entry point for the demo driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the configured backend and flush it
/// 4. Store sample values through the instrumented `store`
/// 5. Print the values read back and the replay transcript
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: backend={:?}, redis_url={}, replay_format={:?}",
        config.backend, config.redis_url, config.replay_format
    );

    let backend: Box<dyn KeyValueStore> = match config.backend {
        Backend::Redis => Box::new(
            RedisStore::connect(&config.redis_url).context("Redis backend unavailable")?,
        ),
        Backend::Memory => Box::new(MemoryStore::new()),
    };
    let mut cache = Cache::new(backend).context("Failed to initialize cache")?;

    run_demo(&mut cache, config.replay_format)
}

/// Stores sample values, reads them back and prints the replay transcript.
fn run_demo(cache: &mut DynCache, format: ReplayFormat) -> anyhow::Result<()> {
    let name = qualified_name("store");
    let mut store = count_calls(
        &name,
        call_history(&name, |cache: &mut DynCache, value: Value| cache.store(value)),
    );

    let text_key = store(cache, Value::from("foo"))?;
    let bytes_key = store(cache, Value::from(b"bar"))?;
    let int_key = store(cache, Value::from(42))?;
    let float_key = store(cache, Value::from(2.5))?;

    println!("{} -> {}", text_key, cache.retrieve_as_text(&text_key)?);
    println!("{} -> {:?}", bytes_key, cache.retrieve(&bytes_key)?);
    println!("{} -> {}", int_key, cache.retrieve_as_integer(&int_key)?);
    println!("{} -> {}", float_key, cache.retrieve_as_float(&float_key)?);

    let transcript = replay(cache.backend_mut(), &name)?;
    match format {
        ReplayFormat::Text => println!("{}", transcript),
        ReplayFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&transcript).context("Failed to encode transcript")?
        ),
    }

    info!("Demo complete");
    Ok(())
}
