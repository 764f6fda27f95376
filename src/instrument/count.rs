//! Call counting wrapper.

use tracing::debug;

use crate::backend::KeyValueStore;
use crate::cache::Cache;
use crate::error::Result;

/// Wraps `op` so every invocation increments the counter stored under `name`.
///
/// The increment happens before `op` runs, so calls that fail are counted as
/// well. A failed increment aborts the call without running `op`.
pub fn count_calls<S, A, R, F>(
    name: &str,
    mut op: F,
) -> impl FnMut(&mut Cache<S>, A) -> Result<R>
where
    S: KeyValueStore,
    F: FnMut(&mut Cache<S>, A) -> Result<R>,
{
    let name = name.to_string();
    move |cache: &mut Cache<S>, args: A| {
        let calls = cache.backend_mut().incr(&name)?;
        debug!("{} call #{}", name, calls);
        op(cache, args)
    }
}
