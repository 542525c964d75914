//! Recursive mapping over nested collections.
//!
//! Produces a new sequence by running each element of the input through a
//! callback, descending into nested sequences instead of passing them to the
//! callback. The output mirrors the input's nesting shape exactly; only leaf
//! elements are transformed.

use crate::callback::Callback;
use crate::collection::{entries, is_sequence};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Default recursion limit. Deep enough for any realistic document while
/// keeping adversarial nesting from exhausting the stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling the deep mapping operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepMapOptions {
    /// Maximum nesting depth to descend into. Input nested deeper than this
    /// fails with [`Error::DepthExceeded`].
    pub max_depth: usize,
}

impl Default for DeepMapOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Deep-map `collection` through `callback` with default options.
///
/// The result is always a newly allocated sequence, even for object input
/// (object keys only feed the callback's second argument). Non-iterable
/// input yields an empty sequence.
pub fn deep_map(collection: &Value, callback: &Callback) -> Result<Vec<Value>> {
    deep_map_with(collection, callback, &DeepMapOptions::default())
}

/// Deep-map `collection` through `callback` with explicit options.
pub fn deep_map_with(
    collection: &Value,
    callback: &Callback,
    options: &DeepMapOptions,
) -> Result<Vec<Value>> {
    debug!(
        "Deep mapping with {:?}, max depth {}",
        callback, options.max_depth
    );
    map_level(collection, callback, 1, options)
}

fn map_level(
    collection: &Value,
    callback: &Callback,
    depth: usize,
    options: &DeepMapOptions,
) -> Result<Vec<Value>> {
    let mut results = match collection {
        Value::Array(items) => Vec::with_capacity(items.len()),
        _ => Vec::new(),
    };

    for (key, value) in entries(collection) {
        if is_sequence(value) {
            if depth >= options.max_depth {
                return Err(Error::DepthExceeded {
                    limit: options.max_depth,
                });
            }
            // Recurse with the already-resolved callback; nested sequences
            // stay sequences in the output.
            let nested = map_level(value, callback, depth + 1, options)?;
            results.push(Value::Array(nested));
        } else {
            results.push(callback.invoke(value, &key, collection));
        }
    }

    Ok(results)
}
