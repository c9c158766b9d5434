//! The host-side value representation.
//!
//! Widgets never see native scene types. They exchange [`HostValue`]s:
//! bools, wide ints, wide floats, strings, and nested sequences. Every
//! structured native value flattens into that shape (a `float3` becomes
//! a three-float sequence, a matrix a sequence of row sequences).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParamError, Result};

/// A plain value as the host editor sees it.
///
/// Numbers are carried at full width (`i64`, `f64`) so one shape covers
/// all native precisions. Variant order matters to the untagged serde
/// form: integers must be tried before floats so `1` stays an `Int`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<HostValue>),
}

impl HostValue {
    /// Returns a short name for the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Str(_) => "string",
            HostValue::Seq(_) => "sequence",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            HostValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric payload. Ints widen to floats here; a bool
    /// does not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HostValue::Int(i) => Some(*i as f64),
            HostValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Builds a sequence of floats.
    pub fn floats(values: impl IntoIterator<Item = f64>) -> HostValue {
        HostValue::Seq(values.into_iter().map(HostValue::Float).collect())
    }

    /// Converts to a JSON value.
    ///
    /// Non-finite floats have no JSON number form and become `null`,
    /// matching what the host serializer does with them.
    pub fn to_json(&self) -> Value {
        match self {
            HostValue::Bool(b) => Value::Bool(*b),
            HostValue::Int(i) => Value::Number((*i).into()),
            HostValue::Float(f) => {
                serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number)
            }
            HostValue::Str(s) => Value::String(s.clone()),
            HostValue::Seq(items) => Value::Array(items.iter().map(HostValue::to_json).collect()),
        }
    }

    /// Converts from a JSON value.
    ///
    /// A top-level `null` is an absent value, not an error, so the
    /// result is doubly wrapped. Nulls inside arrays and JSON objects
    /// have no host representation and fail.
    pub fn from_json(value: &Value) -> Result<Option<HostValue>> {
        match value {
            Value::Null => Ok(None),
            other => Self::from_json_inner(other).map(Some),
        }
    }

    fn from_json_inner(value: &Value) -> Result<HostValue> {
        match value {
            Value::Null => Err(ParamError::UnsupportedJson(
                "null inside a sequence".to_owned(),
            )),
            Value::Bool(b) => Ok(HostValue::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(HostValue::Int)
                .or_else(|| n.as_f64().map(HostValue::Float))
                .ok_or_else(|| ParamError::UnsupportedJson(format!("number {n}"))),
            Value::String(s) => Ok(HostValue::Str(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::from_json_inner)
                .collect::<Result<Vec<_>>>()
                .map(HostValue::Seq),
            Value::Object(_) => Err(ParamError::UnsupportedJson("object".to_owned())),
        }
    }
}

impl From<bool> for HostValue {
    fn from(v: bool) -> Self {
        HostValue::Bool(v)
    }
}

impl From<i32> for HostValue {
    fn from(v: i32) -> Self {
        HostValue::Int(i64::from(v))
    }
}

impl From<i64> for HostValue {
    fn from(v: i64) -> Self {
        HostValue::Int(v)
    }
}

impl From<f32> for HostValue {
    fn from(v: f32) -> Self {
        HostValue::Float(f64::from(v))
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        HostValue::Float(v)
    }
}

impl From<&str> for HostValue {
    fn from(v: &str) -> Self {
        HostValue::Str(v.to_owned())
    }
}

impl From<String> for HostValue {
    fn from(v: String) -> Self {
        HostValue::Str(v)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(v: Vec<T>) -> Self {
        HostValue::Seq(v.into_iter().map(Into::into).collect())
    }
}
