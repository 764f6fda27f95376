//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache and instrumentation invariants over
//! generated inputs.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::backend::{KeyValueStore, MemoryStore};
use crate::cache::{qualified_name, Cache, Value};
use crate::error::CacheError;
use crate::instrument::{call_history, count_calls, inputs_key, outputs_key, replay};

// == Strategies ==
/// Generates any storable value
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        ".{0,64}".prop_map(Value::Text),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::Bytes),
        any::<i64>().prop_map(Value::Integer),
        // Finite floats only: NaN never compares equal to itself
        (-1.0e12f64..1.0e12f64).prop_map(Value::Float),
    ]
}

fn new_cache() -> Cache<MemoryStore> {
    Cache::new(MemoryStore::new()).unwrap()
}

fn list_len(cache: &mut Cache<MemoryStore>, key: &str) -> usize {
    cache.backend_mut().lrange(key, 0, -1).unwrap().len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a value and retrieving it without a converter yields exactly the
    // bytes that were written.
    #[test]
    fn prop_roundtrip_raw(value in value_strategy()) {
        let mut cache = new_cache();

        let key = cache.store(value.clone()).unwrap();
        let raw = cache.retrieve(&key).unwrap();
        prop_assert_eq!(raw, Some(value.to_bytes()), "Round-trip bytes mismatch");
    }

    // Typed accessors invert the encoding of their own variant.
    #[test]
    fn prop_roundtrip_typed(text in ".{0,64}", n in any::<i64>(), x in -1.0e12f64..1.0e12f64) {
        let mut cache = new_cache();

        let text_key = cache.store(text.clone()).unwrap();
        let int_key = cache.store(n).unwrap();
        let float_key = cache.store(x).unwrap();

        prop_assert_eq!(cache.retrieve_as_text(&text_key).unwrap(), text);
        prop_assert_eq!(cache.retrieve_as_integer(&int_key).unwrap(), n);
        prop_assert_eq!(cache.retrieve_as_float(&float_key).unwrap(), x);
    }

    // Every key issued within a session is distinct.
    #[test]
    fn prop_keys_unique(values in prop::collection::vec(value_strategy(), 1..100)) {
        let mut cache = new_cache();
        let mut seen = HashSet::new();

        for value in values {
            let key = cache.store(value).unwrap();
            prop_assert!(seen.insert(key), "Duplicate key issued");
        }
    }

    // Re-initializing over the same store makes every known key absent.
    #[test]
    fn prop_initialize_forgets_keys(values in prop::collection::vec(value_strategy(), 1..20)) {
        let mut cache = new_cache();
        let keys: Vec<String> = values
            .into_iter()
            .map(|v| cache.store(v).unwrap())
            .collect();

        let mut cache = Cache::new(cache.into_backend()).unwrap();
        for key in keys {
            prop_assert_eq!(cache.retrieve(&key).unwrap(), None);
        }
    }

    // After N counted calls, successful or not, the counter reads N.
    #[test]
    fn prop_counter_equals_calls(outcomes in prop::collection::vec(any::<bool>(), 1..30)) {
        let mut cache = new_cache();
        let name = qualified_name("maybe");
        let mut op = count_calls(&name, |_: &mut Cache<MemoryStore>, ok: bool| {
            if ok { Ok(()) } else { Err(CacheError::Store("failed".to_string())) }
        });

        for ok in &outcomes {
            let _ = op(&mut cache, *ok);
        }

        prop_assert_eq!(
            cache.retrieve_as_integer(&name).unwrap(),
            outcomes.len() as i64
        );
    }

    // After N successful recorded calls both lists hold N entries and the
    // outputs line up with the keys returned.
    #[test]
    fn prop_history_pairs_calls(values in prop::collection::vec(value_strategy(), 1..30)) {
        let mut cache = new_cache();
        let name = qualified_name("store");
        let mut store = count_calls(
            &name,
            call_history(&name, |c: &mut Cache<MemoryStore>, v: Value| c.store(v)),
        );

        let mut expected = Vec::new();
        for value in &values {
            let key = store(&mut cache, value.clone()).unwrap();
            expected.push((format!("{:?}", value), format!("{:?}", key)));
        }

        prop_assert_eq!(list_len(&mut cache, &inputs_key(&name)), values.len());
        prop_assert_eq!(list_len(&mut cache, &outputs_key(&name)), values.len());

        let transcript = replay(cache.backend_mut(), &name).unwrap();
        prop_assert_eq!(transcript.calls, values.len() as i64);
        let actual: Vec<(String, String)> = transcript
            .records
            .into_iter()
            .map(|r| (r.input, r.output))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    // Replay pairs only as many records as the shorter list holds.
    #[test]
    fn prop_replay_truncates(inputs in 0usize..20, outputs in 0usize..20) {
        let mut store = MemoryStore::new();
        for i in 0..inputs {
            store.rpush("Op.run:inputs", format!("in{}", i).as_bytes()).unwrap();
        }
        for i in 0..outputs {
            store.rpush("Op.run:outputs", format!("out{}", i).as_bytes()).unwrap();
        }

        let transcript = replay(&mut store, "Op.run").unwrap();
        prop_assert_eq!(transcript.records.len(), inputs.min(outputs));
        for (i, record) in transcript.records.iter().enumerate() {
            prop_assert_eq!(&record.input, &format!("in{}", i));
            prop_assert_eq!(&record.output, &format!("out{}", i));
        }
    }
}
