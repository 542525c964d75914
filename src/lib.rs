//! # Deepmap
//!
//! Recursive mapping over JSON-shaped collections.
//!
//! [`deep_map`] runs every element of a collection through a callback and
//! collects the results into a new sequence, descending into nested
//! sequences instead of handing them to the callback. Callbacks come in
//! function, pluck (property name), and where (partial match) forms, plus
//! identity as the default.
//!
//! ```
//! use deepmap::{deep_map, Callback};
//! use serde_json::json;
//!
//! let tripled = deep_map(
//!     &json!([1, 2, [3]]),
//!     &Callback::function(|v, _, _| json!(v.as_i64().unwrap() * 3)),
//! )
//! .unwrap();
//! assert_eq!(tripled, vec![json!(3), json!(6), json!([9])]);
//!
//! let names = deep_map(
//!     &json!([{"name": "barney", "age": 36}, [{"name": "fred", "age": 40}]]),
//!     &Callback::pluck("name"),
//! )
//! .unwrap();
//! assert_eq!(names, vec![json!("barney"), json!(["fred"])]);
//! ```
//!
//! ## Modules
//!
//! - `callback` - Callback shorthand resolution into a tagged callback value
//! - `collection` - Iteration primitives over arrays and objects
//! - `deep` - The recursive mapping operation and its options
//! - `error` - Typed errors and the crate-wide `Result` alias
pub mod callback;
pub mod collection;
pub mod deep;
pub mod error;

pub use callback::{matches_partial, Callback};
pub use collection::{entries, is_sequence, map, Entries, Key};
pub use deep::{deep_map, deep_map_with, DeepMapOptions, DEFAULT_MAX_DEPTH};
pub use error::{Error, Result};
