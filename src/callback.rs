//! Callback shorthand resolution.
//!
//! Callbacks are accepted in several forms and resolved once, up front, into
//! a single tagged value before mapping begins:
//!
//! - a function of (element, index-or-key, collection)
//! - a property-name string, producing a pluck-style extractor
//! - a partial-match object, producing a where-style predicate
//!
//! Omitting the callback means the identity transformation.

use crate::collection::Key;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;

type CallbackFn<'a> = Box<dyn Fn(&Value, &Key, &Value) -> Value + 'a>;

/// A resolved callback, ready to be invoked per leaf element.
pub enum Callback<'a> {
    /// Returns each leaf element unchanged.
    Identity,
    /// Arbitrary transformation of (element, index-or-key, collection).
    Function(CallbackFn<'a>),
    /// Extracts the named property from each leaf element; missing
    /// properties become `Value::Null`.
    Pluck(String),
    /// Tests each leaf element for a partial match against the given
    /// object's properties, producing a boolean.
    Where(Map<String, Value>),
}

impl fmt::Debug for Callback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Identity => f.write_str("Identity"),
            Callback::Function(_) => f.write_str("Function(..)"),
            Callback::Pluck(name) => f.debug_tuple("Pluck").field(name).finish(),
            Callback::Where(spec) => f.debug_tuple("Where").field(spec).finish(),
        }
    }
}

impl<'a> Callback<'a> {
    /// The default callback: leaves values unchanged.
    pub fn identity() -> Self {
        Callback::Identity
    }

    /// Pluck-style shorthand: extract `name` from each leaf element.
    pub fn pluck(name: impl Into<String>) -> Self {
        Callback::Pluck(name.into())
    }

    /// Where-style shorthand: test each leaf element against `spec`.
    pub fn matching(spec: Map<String, Value>) -> Self {
        Callback::Where(spec)
    }

    /// Function form, invoked with (element, index-or-key, collection).
    pub fn function(f: impl Fn(&Value, &Key, &Value) -> Value + 'a) -> Self {
        Callback::Function(Box::new(f))
    }

    /// Function form bound to an explicit context value. The binding happens
    /// once here; `f` receives `context` as its first argument on every
    /// invocation.
    pub fn function_with<C: ?Sized>(
        context: &'a C,
        f: impl Fn(&C, &Value, &Key, &Value) -> Value + 'a,
    ) -> Self {
        Callback::Function(Box::new(move |value, key, collection| {
            f(context, value, key, collection)
        }))
    }

    /// Resolve a dynamic shorthand value.
    ///
    /// Strings become pluck callbacks, objects become where callbacks, and
    /// null means identity. Any other value is rejected.
    pub fn from_value(shorthand: &Value) -> Result<Self> {
        match shorthand {
            Value::Null => Ok(Callback::Identity),
            Value::String(name) => Ok(Callback::Pluck(name.clone())),
            Value::Object(spec) => Ok(Callback::Where(spec.clone())),
            other => Err(Error::UnsupportedCallback(json_type_name(other).to_string())),
        }
    }

    /// Apply the callback to a single leaf element.
    pub fn invoke(&self, value: &Value, key: &Key, collection: &Value) -> Value {
        match self {
            Callback::Identity => value.clone(),
            Callback::Function(f) => f(value, key, collection),
            Callback::Pluck(name) => value.get(name).cloned().unwrap_or(Value::Null),
            Callback::Where(spec) => Value::Bool(matches_partial(value, spec)),
        }
    }
}

/// Returns true when every property of `spec` is present on `element` with
/// an equal value. An empty spec matches everything.
pub fn matches_partial(element: &Value, spec: &Map<String, Value>) -> bool {
    spec.iter()
        .all(|(field, expected)| element.get(field) == Some(expected))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
