//! `typeof`-style classification of [`Value`]s.
//!
//! Two classifiers are provided:
//!
//! - [`classify`] reproduces the familiar tags, including the oddity that the
//!   null marker reports as `object`. Arrays also report as `object`.
//! - [`classify_precise`] gives null and arrays their own `null` / `array` tags.
//!
//! Dates get a `date` tag from both.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Coarse category of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Undefined,
    Object,
    String,
    Number,
    Boolean,
    Function,
    Date,
    /// Only produced by [`classify_precise`].
    Null,
    /// Only produced by [`classify_precise`].
    Array,
}

impl TypeTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Object => "object",
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Function => "function",
            TypeTag::Date => "date",
            TypeTag::Null => "null",
            TypeTag::Array => "array",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for TypeTag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Classify a value the way `typeof` does: null and arrays are `object`.
pub fn classify(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null | Value::Object(_) | Value::Array(_) => TypeTag::Object,
        Value::String(_) => TypeTag::String,
        Value::Number(_) => TypeTag::Number,
        Value::Boolean(_) => TypeTag::Boolean,
        Value::Function(_) => TypeTag::Function,
        Value::Date(_) => TypeTag::Date,
    }
}

/// Like [`classify`], but null is `null` and arrays are `array`.
pub fn classify_precise(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Null,
        Value::Array(_) => TypeTag::Array,
        other => classify(other),
    }
}
