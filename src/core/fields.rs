//! Structured context fields attached to log entries

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Key/value context carried by an entry
pub type Fields = HashMap<String, FieldValue>;

/// Key used by `with_error`
pub const ERROR_KEY: &str = "error";

/// Value type for structured logging fields
///
/// The variants cover every kind of value the formatters render
/// differently. Anything else is captured through [`FieldValue::display`].
#[derive(Debug, Clone)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Time(DateTime<Utc>),
    Error(Arc<dyn StdError + Send + Sync>),
    /// Pre-rendered value of an arbitrary `Display` type
    Display(String),
    Null,
}

impl FieldValue {
    /// Wrap an error value
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        FieldValue::Error(Arc::new(err))
    }

    /// Capture any displayable value as text
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        FieldValue::Display(value.to_string())
    }

    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Values JSON cannot represent (non-finite floats) are replaced by a
    /// string describing the problem instead of failing the whole entry.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            FieldValue::String(s) | FieldValue::Display(s) => Value::String(s.clone()),
            FieldValue::Int(i) => Value::Number((*i).into()),
            FieldValue::Uint(u) => Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(format!("json: unsupported value: {}", f))),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Time(t) => Value::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            FieldValue::Error(e) => Value::String(e.to_string()),
            FieldValue::Null => Value::Null,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) | FieldValue::Display(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Uint(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Time(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            FieldValue::Error(e) => write!(f, "{}", e),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (FieldValue::Display(a), FieldValue::Display(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::Uint(a), FieldValue::Uint(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Time(a), FieldValue::Time(b)) => a == b,
            // errors have no equality of their own
            (FieldValue::Error(a), FieldValue::Error(b)) => a.to_string() == b.to_string(),
            (FieldValue::Null, FieldValue::Null) => true,
            _ => false,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(i: $t) -> Self {
                FieldValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(u: $t) -> Self {
                FieldValue::Uint(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Time(t)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for FieldValue {
    fn from(e: Box<dyn StdError + Send + Sync>) -> Self {
        FieldValue::Error(Arc::from(e))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
