//! Checked access over an untyped JSON tree.
//!
//! `JsonNode` is a borrowed cursor into a `serde_json::Value`. Navigation
//! (`get`, `index`) never fails: a missing key, an out-of-range index or a
//! lookup on the wrong variant yields an empty node. Conversions (`array`,
//! `map`, `string`, `int64`) check the variant and return
//! [`ExchangeError::TypeMismatch`] when it does not match.

use crate::core::errors::ExchangeError;
use serde_json::{Map, Value};

/// Parse a raw response body into a JSON tree.
pub fn parse(data: &[u8]) -> Result<Value, ExchangeError> {
    Ok(serde_json::from_slice(data)?)
}

#[derive(Debug, Clone, Copy)]
pub struct JsonNode<'a> {
    value: Option<&'a Value>,
}

impl<'a> JsonNode<'a> {
    pub const fn new(value: &'a Value) -> Self {
        Self { value: Some(value) }
    }

    const fn empty() -> Self {
        Self { value: None }
    }

    /// The underlying value, `None` when navigation missed.
    pub const fn value(&self) -> Option<&'a Value> {
        self.value
    }

    pub fn get(&self, key: &str) -> Self {
        match self.value {
            Some(Value::Object(map)) => map.get(key).map_or_else(Self::empty, Self::new),
            _ => Self::empty(),
        }
    }

    pub fn index(&self, i: usize) -> Self {
        match self.value {
            Some(Value::Array(items)) => items.get(i).map_or_else(Self::empty, Self::new),
            _ => Self::empty(),
        }
    }

    pub fn array(&self) -> Result<&'a [Value], ExchangeError> {
        match self.value {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            other => Err(mismatch("array", other)),
        }
    }

    pub fn map(&self) -> Result<&'a Map<String, Value>, ExchangeError> {
        match self.value {
            Some(Value::Object(map)) => Ok(map),
            other => Err(mismatch("object", other)),
        }
    }

    pub fn string(&self) -> Result<&'a str, ExchangeError> {
        match self.value {
            Some(Value::String(s)) => Ok(s.as_str()),
            other => Err(mismatch("string", other)),
        }
    }

    /// Integral numbers that fit in an `i64`. Fractional numbers and numeric
    /// strings are rejected.
    pub fn int64(&self) -> Result<i64, ExchangeError> {
        match self.value {
            Some(Value::Number(n)) => n.as_i64().ok_or(ExchangeError::TypeMismatch {
                expected: "int64",
                found: "non-integral number",
            }),
            other => Err(mismatch("int64", other)),
        }
    }

    /// `string()` with conversion failures mapped to `""`.
    pub fn string_or_default(&self) -> String {
        self.string().map(str::to_string).unwrap_or_default()
    }

    /// `int64()` with conversion failures mapped to `0`.
    pub fn int64_or_default(&self) -> i64 {
        self.int64().unwrap_or_default()
    }
}

impl<'a> From<&'a Value> for JsonNode<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(value)
    }
}

fn kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn mismatch(expected: &'static str, found: Option<&Value>) -> ExchangeError {
    ExchangeError::TypeMismatch {
        expected,
        found: kind(found),
    }
}
