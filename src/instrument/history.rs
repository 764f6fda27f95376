//! Call history wrapper.
//!
//! Records the `Debug` rendering of each call's arguments under
//! `"<name>:inputs"` and of its result under `"<name>:outputs"`.

use std::fmt::Debug;

use tracing::debug;

use crate::backend::KeyValueStore;
use crate::cache::Cache;
use crate::error::Result;

/// Key of the list holding the recorded inputs for `name`.
pub fn inputs_key(name: &str) -> String {
    format!("{}:inputs", name)
}

/// Key of the list holding the recorded outputs for `name`.
pub fn outputs_key(name: &str) -> String {
    format!("{}:outputs", name)
}

/// Wraps `op` so each call appends its arguments and result to the history
/// lists for `name`.
///
/// The input is appended before `op` runs. The output is appended only when
/// `op` succeeds, so a failed call leaves an input with no matching output.
pub fn call_history<S, A, R, F>(
    name: &str,
    mut op: F,
) -> impl FnMut(&mut Cache<S>, A) -> Result<R>
where
    S: KeyValueStore,
    A: Debug,
    R: Debug,
    F: FnMut(&mut Cache<S>, A) -> Result<R>,
{
    let inputs = inputs_key(name);
    let outputs = outputs_key(name);
    move |cache: &mut Cache<S>, args: A| {
        let input = format!("{:?}", args);
        cache.backend_mut().rpush(&inputs, input.as_bytes())?;

        let result = op(cache, args)?;

        let output = format!("{:?}", result);
        cache.backend_mut().rpush(&outputs, output.as_bytes())?;
        debug!("Recorded {} -> {}", input, output);
        Ok(result)
    }
}
