//! Dynamic values as a script runtime sees them.
//!
//! `Value` is a closed tagged union: every runtime category is a variant, so
//! classification is a plain `match` rather than reflection. Objects keep their
//! entries in insertion order as `Vec<(String, Value)>`.

use chrono::{DateTime, Utc};

use crate::error::Result;

/// A function reference, described by name and declared parameter count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub name: String,
    pub arity: usize,
}

impl Callable {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value (`undefined`).
    Undefined,
    /// The explicit null marker.
    Null,
    String(String),
    Number(f64),
    Boolean(bool),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, Value)>),
    Array(Vec<Value>),
    Function(Callable),
    Date(DateTime<Utc>),
}

impl Value {
    /// Parse JSON text into a `Value`.
    ///
    /// JSON has no undefined, function or date, so only the remaining variants
    /// can be produced. Object key order is preserved.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(parsed.into())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            // Every JSON number is representable as f64, possibly with rounding.
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Value::Function(f)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Date(dt)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
