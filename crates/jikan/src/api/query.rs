//! Query parameter marshaling.
//!
//! Absent values never reach the wire: `None` options and JSON `null`s are
//! dropped on insertion. Parameters are kept sorted by name so that equal
//! parameter sets always produce the same query string.

use crate::error::JikanError;
use crate::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Write};

/// Query parameters for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter
    pub fn set(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a parameter only when a value is present
    pub fn set_opt<V: Display>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(name, value);
        }
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.0.insert(name.into(), value.to_string());
    }

    /// Flatten a params struct into query parameters
    ///
    /// Fields serializing to `null` are omitted; nested arrays and objects
    /// have no query representation and are rejected.
    pub fn from_serialize<T: Serialize + ?Sized>(params: &T) -> Result<Self> {
        let value =
            serde_json::to_value(params).map_err(|e| JikanError::InvalidQuery(e.to_string()))?;

        let fields = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(fields) => fields,
            other => {
                return Err(JikanError::InvalidQuery(format!(
                    "expected a map of parameters, got {other}"
                )))
            }
        };

        let mut query = Self::new();
        for (name, value) in fields {
            match value {
                Value::Null => {}
                Value::String(s) => query.insert(name, s),
                Value::Number(n) => query.insert(name, n),
                Value::Bool(b) => query.insert(name, b),
                Value::Array(_) | Value::Object(_) => {
                    return Err(JikanError::InvalidQuery(format!(
                        "parameter '{name}' is not a primitive value"
                    )))
                }
            }
        }
        Ok(query)
    }

    /// Merge `other` into `self`; values from `other` win
    pub fn merge(mut self, other: QueryParams) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Percent-encoded `a=1&b=2` form, sorted by name
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            encode_into(&mut out, name);
            out.push('=');
            encode_into(&mut out, value);
        }
        out
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs
            .into_iter()
            .fold(QueryParams::new(), |query, (k, v)| query.set(k, v))
    }
}

fn encode_into(out: &mut String, raw: &str) {
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
}
