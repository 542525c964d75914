//! Iteration primitives shared by the shallow and deep mapping operations.
//!
//! These mirror the host collection model: arrays are ordered sequences,
//! objects are keyed mappings, and everything else iterates as empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Position of an element within the collection being iterated: an array
/// index or an object key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Returns true when the value is a sequence, the only shape the deep
/// mapper descends into. Object elements are treated as leaves.
pub fn is_sequence(value: &Value) -> bool {
    value.is_array()
}

/// Iterate a collection as `(Key, &Value)` pairs.
///
/// Arrays yield indexed entries in order, objects yield keyed entries in map
/// iteration order, and every other value yields nothing.
pub fn entries(collection: &Value) -> Entries<'_> {
    let inner = match collection {
        Value::Array(items) => EntriesInner::Array(items.iter().enumerate()),
        Value::Object(map) => EntriesInner::Object(map.iter()),
        _ => EntriesInner::Empty,
    };
    Entries { inner }
}

/// Iterator returned by [`entries`].
pub struct Entries<'a> {
    inner: EntriesInner<'a>,
}

enum EntriesInner<'a> {
    Array(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Object(serde_json::map::Iter<'a>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Array(iter) => iter.next().map(|(i, v)| (Key::Index(i), v)),
            EntriesInner::Object(iter) => iter.next().map(|(k, v)| (Key::Name(k.clone()), v)),
            EntriesInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Array(iter) => iter.size_hint(),
            EntriesInner::Object(iter) => iter.size_hint(),
            EntriesInner::Empty => (0, Some(0)),
        }
    }
}

/// Generic shallow map: applies `f` to every entry of the collection and
/// collects the results into a new sequence.
///
/// Object input produces a sequence of transformed values; keys are only
/// passed through as the second argument to `f`.
pub fn map(collection: &Value, mut f: impl FnMut(&Value, &Key) -> Value) -> Vec<Value> {
    entries(collection)
        .map(|(key, value)| f(value, &key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_array_order() {
        let data = json!(["a", "b", "c"]);
        let collected: Vec<_> = entries(&data).collect();

        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0], (Key::Index(0), &json!("a")));
        assert_eq!(collected[2], (Key::Index(2), &json!("c")));
    }

    #[test]
    fn test_entries_object_keys() {
        let data = json!({"one": 1, "two": 2});
        let keys: Vec<_> = entries(&data).map(|(k, _)| k).collect();

        assert!(keys.contains(&Key::Name("one".to_string())));
        assert!(keys.contains(&Key::Name("two".to_string())));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_entries_scalar_is_empty() {
        assert_eq!(entries(&json!("hello")).count(), 0);
        assert_eq!(entries(&json!(42)).count(), 0);
        assert_eq!(entries(&json!(null)).count(), 0);
        assert_eq!(entries(&json!(true)).count(), 0);
    }

    #[test]
    fn test_is_sequence() {
        assert!(is_sequence(&json!([1, 2])));
        assert!(!is_sequence(&json!({"a": 1})));
        assert!(!is_sequence(&json!("text")));
        assert!(!is_sequence(&json!(null)));
    }

    #[test]
    fn test_map_flat_array() {
        let data = json!([1, 2, 3]);
        let doubled = map(&data, |v, _| json!(v.as_i64().unwrap() * 2));

        assert_eq!(doubled, vec![json!(2), json!(4), json!(6)]);
    }

    #[test]
    fn test_map_passes_keys() {
        let data = json!(["x", "y"]);
        let indexed = map(&data, |_, k| json!(k.to_string()));

        assert_eq!(indexed, vec![json!("0"), json!("1")]);
    }

    #[test]
    fn test_map_object_yields_values() {
        let data = json!({"a": 1});
        let results = map(&data, |v, _| v.clone());

        assert_eq!(results, vec![json!(1)]);
    }
}
