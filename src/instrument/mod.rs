//! Call Instrumentation Module
//!
//! Wrappers that record how cache operations are used, and the replay tool
//! that reads those records back.
//!
//! An operation is any `FnMut(&mut Cache<S>, A) -> Result<R>`. Each wrapper
//! takes an operation and returns one with the same shape, so they nest:
//!
//! ```
//! use redis_cache::backend::MemoryStore;
//! use redis_cache::cache::{qualified_name, Cache, Value};
//! use redis_cache::instrument::{call_history, count_calls, replay};
//!
//! let name = qualified_name("store");
//! let mut cache = Cache::new(MemoryStore::new()).unwrap();
//! let mut store = count_calls(
//!     &name,
//!     call_history(&name, |cache: &mut Cache<MemoryStore>, value: Value| cache.store(value)),
//! );
//!
//! store(&mut cache, Value::from("foo")).unwrap();
//! let transcript = replay(cache.backend_mut(), &name).unwrap();
//! assert_eq!(transcript.calls, 1);
//! ```

mod count;
mod history;
mod replay;

pub use count::count_calls;
pub use history::{call_history, inputs_key, outputs_key};
pub use replay::{replay, CallRecord, Transcript};
