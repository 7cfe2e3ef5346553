use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// A JSON document contained a number `CalcValue` cannot represent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported number value: {value}")]
pub struct UnsupportedNumber {
    /// Textual form of the offending number.
    pub value: String,
}

/// Possible values a calculator input field can carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalcValue {
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of `CalcValues`
    Array(Vec<CalcValue>),
    /// Object/map of string keys to `CalcValues`
    Object(HashMap<String, CalcValue>),
    /// UTC date/time value
    Date(DateTime<Utc>),
    /// Null value
    Null,
}

// -------------------------------------------------------------------------------------------------
// Conversions between internal `CalcValue` and `serde_json::Value`.
// These let an API or form layer hand raw JSON to the registry without any
// hand-written mapping code of its own.
// -------------------------------------------------------------------------------------------------

impl From<CalcValue> for serde_json::Value {
    fn from(value: CalcValue) -> Self {
        match value {
            CalcValue::String(s) => Self::String(s),
            CalcValue::Integer(i) => Self::Number(serde_json::Number::from(i)),
            CalcValue::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
            CalcValue::Boolean(b) => Self::Bool(b),
            CalcValue::Array(arr) => {
                let vec: Vec<Self> = arr.into_iter().map(std::convert::Into::into).collect();
                Self::Array(vec)
            }
            CalcValue::Object(map) => {
                let json_map = map
                    .into_iter()
                    .map(|(k, v)| (k, v.into()))
                    .collect::<serde_json::Map<String, Self>>();
                Self::Object(json_map)
            }
            CalcValue::Date(dt) => Self::String(dt.to_rfc3339()),
            CalcValue::Null => Self::Null,
        }
    }
}

impl TryFrom<&serde_json::Value> for CalcValue {
    type Error = UnsupportedNumber;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    return Err(UnsupportedNumber { value: n.to_string() });
                }
            }
            serde_json::Value::Bool(b) => Self::Boolean(*b),
            serde_json::Value::Array(arr) => {
                let inner = arr.iter().map(Self::try_from).collect::<Result<Vec<_>, _>>()?;
                Self::Array(inner)
            }
            serde_json::Value::Object(map) => {
                let mut inner = HashMap::new();
                for (k, v) in map {
                    inner.insert(k.clone(), Self::try_from(v)?);
                }
                Self::Object(inner)
            }
            serde_json::Value::Null => Self::Null,
        })
    }
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(arr) => {
                write!(f, "[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Object(obj) => {
                write!(f, "{{")?;
                let mut first = true;
                for (key, value) in obj {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                    first = false;
                }
                write!(f, "}}")
            }
            Self::Date(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Self::Null => write!(f, "null"),
        }
    }
}

impl CalcValue {
    /// Get the type name as a string, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Date(_) => "date",
            Self::Null => "null",
        }
    }

    /// Convenience accessor returning an `f64` representation if this value
    /// is numeric. Returns `None` when the variant is not `Integer` or
    /// `Float`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Convenience accessor returning an `i64` if this value is an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Render the value as a plain string.
    #[must_use]
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_round_trip_preserves_scalars() {
        let raw = json!({"amount": 1500, "rate": 4.25, "fixed": true, "label": "roi"});
        let value = CalcValue::try_from(&raw).unwrap();
        let back: serde_json::Value = value.into();
        assert_eq!(back, raw);
    }

    #[test]
    fn numeric_accessors_cross_convert() {
        assert_eq!(CalcValue::Integer(3).as_float(), Some(3.0));
        assert_eq!(CalcValue::Float(2.5).as_float(), Some(2.5));
        assert_eq!(CalcValue::String("x".into()).as_float(), None);
        assert_eq!(CalcValue::Integer(7).as_integer(), Some(7));
    }

    #[test]
    fn dates_serialize_as_rfc3339_strings() {
        let dt = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let json: serde_json::Value = CalcValue::Date(dt).into();
        assert_eq!(json, serde_json::Value::String("2024-01-01T00:00:00+00:00".into()));
    }

    #[test]
    fn type_name_matches_variant() {
        assert_eq!(CalcValue::Null.type_name(), "null");
        assert_eq!(CalcValue::Array(vec![]).type_name(), "array");
        assert_eq!(CalcValue::Boolean(false).type_name(), "boolean");
    }
}
