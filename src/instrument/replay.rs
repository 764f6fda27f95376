//! Replay Tool
//!
//! Rebuilds the recorded call history of a method from the store.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::backend::KeyValueStore;
use crate::cache::convert;
use crate::error::Result;
use crate::instrument::{inputs_key, outputs_key};

// == Call Record ==
/// One recorded call: the rendered arguments and the rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRecord {
    pub input: String,
    pub output: String,
}

// == Transcript ==
/// Recorded history of a single method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Qualified name of the method
    pub name: String,
    /// Value of the call counter (0 if the method was never counted)
    pub calls: i64,
    /// Completed calls, paired positionally, in call order
    pub records: Vec<CallRecord>,
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was called {} times:", self.name, self.calls)?;
        for record in &self.records {
            write!(f, "\n{}({}) -> {}", self.name, record.input, record.output)?;
        }
        Ok(())
    }
}

// == Replay ==
/// Reads the counter and history lists recorded for `name`.
///
/// Inputs and outputs are paired by position. If the lists differ in length,
/// which happens when a recorded call failed, the extra entries are dropped.
/// Nothing in the store is modified.
pub fn replay<S: KeyValueStore + ?Sized>(store: &mut S, name: &str) -> Result<Transcript> {
    let calls = match store.get(name)? {
        Some(raw) => convert::integer(Some(raw))?,
        None => 0,
    };

    let inputs = store.lrange(&inputs_key(name), 0, -1)?;
    let outputs = store.lrange(&outputs_key(name), 0, -1)?;
    if inputs.len() != outputs.len() {
        debug!(
            "{} has {} inputs and {} outputs, truncating",
            name,
            inputs.len(),
            outputs.len()
        );
    }

    let records = inputs
        .iter()
        .zip(outputs.iter())
        .map(|(input, output)| CallRecord {
            input: String::from_utf8_lossy(input).into_owned(),
            output: String::from_utf8_lossy(output).into_owned(),
        })
        .collect();

    Ok(Transcript {
        name: name.to_string(),
        calls,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use crate::error::CacheError;

    #[test]
    fn test_replay_unknown_method() {
        let mut store = MemoryStore::new();

        let transcript = replay(&mut store, "Cache.store").unwrap();
        assert_eq!(transcript.calls, 0);
        assert!(transcript.records.is_empty());
        assert_eq!(transcript.to_string(), "Cache.store was called 0 times:");
    }

    #[test]
    fn test_replay_pairs_in_order() {
        let mut store = MemoryStore::new();
        store.set("Cache.store", b"2").unwrap();
        store.rpush("Cache.store:inputs", br#"Text("a")"#).unwrap();
        store.rpush("Cache.store:inputs", br#"Text("b")"#).unwrap();
        store.rpush("Cache.store:outputs", br#""k1""#).unwrap();
        store.rpush("Cache.store:outputs", br#""k2""#).unwrap();

        let transcript = replay(&mut store, "Cache.store").unwrap();
        assert_eq!(transcript.calls, 2);
        assert_eq!(
            transcript.to_string(),
            "Cache.store was called 2 times:\n\
             Cache.store(Text(\"a\")) -> \"k1\"\n\
             Cache.store(Text(\"b\")) -> \"k2\""
        );
    }

    #[test]
    fn test_replay_truncates_to_shorter_list() {
        let mut store = MemoryStore::new();
        store.set("Parser.parse", b"3").unwrap();
        for input in ["\"1\"", "\"x\"", "\"3\""] {
            store.rpush("Parser.parse:inputs", input.as_bytes()).unwrap();
        }
        store.rpush("Parser.parse:outputs", b"1").unwrap();

        let transcript = replay(&mut store, "Parser.parse").unwrap();
        assert_eq!(transcript.calls, 3);
        assert_eq!(
            transcript.records,
            vec![CallRecord {
                input: "\"1\"".to_string(),
                output: "1".to_string(),
            }]
        );
    }

    #[test]
    fn test_replay_does_not_mutate() {
        let mut store = MemoryStore::new();
        store.set("Cache.store", b"1").unwrap();
        store.rpush("Cache.store:inputs", b"in").unwrap();
        store.rpush("Cache.store:outputs", b"out").unwrap();

        let first = replay(&mut store, "Cache.store").unwrap();
        let second = replay(&mut store, "Cache.store").unwrap();
        assert_eq!(first, second);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replay_non_integer_counter() {
        let mut store = MemoryStore::new();
        store.set("Cache.store", b"many").unwrap();

        let result = replay(&mut store, "Cache.store");
        assert!(matches!(result, Err(CacheError::TypeMismatch(_))));
    }

    #[test]
    fn test_transcript_serializes_to_json() {
        let transcript = Transcript {
            name: "Cache.store".to_string(),
            calls: 1,
            records: vec![CallRecord {
                input: "Integer(42)".to_string(),
                output: "\"k\"".to_string(),
            }],
        };

        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["name"], "Cache.store");
        assert_eq!(json["calls"], 1);
        assert_eq!(json["records"][0]["input"], "Integer(42)");
        assert_eq!(json["records"][0]["output"], "\"k\"");
    }
}
