//! The [`Payload`] value type accepted by the encoder.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, TimeZone};
use serde_json::{Number, Value};

/// A JSON-like value that can also carry timestamps.
///
/// Request bodies are built as `Payload`s so that timestamps keep their
/// type (and UTC offset) until the encoder renders them in the vendor format.
/// Any [`serde_json::Value`] converts into a `Payload`, as does any
/// [`chrono::DateTime`].
///
/// # Example
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone};
/// use jet_api::json::Payload;
///
/// let shipped_at = FixedOffset::west_opt(7 * 3600)
///     .unwrap()
///     .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
///     .unwrap();
///
/// let body: Payload = [
///     ("shipment_tracking_number", Payload::from("1Z999")),
///     ("response_shipment_date", Payload::from(shipped_at)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(body.kind(), "Object");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number.
    Number(Number),
    /// JSON string.
    String(String),
    /// Ordered sequence.
    Array(Vec<Payload>),
    /// Mapping with string keys.
    Object(BTreeMap<String, Payload>),
    /// Timestamp, rendered as `YYYY-MM-DDTHH:mm:ss.fffffff±HH:MM` on encode.
    DateTime(DateTime<FixedOffset>),
}

impl Payload {
    /// Returns an empty object.
    #[must_use]
    pub const fn empty_object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Returns the name of this value's variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Array(_) => "Array",
            Self::Object(_) => "Object",
            Self::DateTime(_) => "DateTime",
        }
    }

    /// Returns `true` for objects and arrays, the only shapes the encoder accepts
    /// at the top level.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Payload {
    fn from(value: DateTime<Tz>) -> Self {
        let offset = value.offset().fix();
        Self::DateTime(value.with_timezone(&offset))
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Payload {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Payload {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Payload {
    /// Non-finite floats have no JSON representation and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Payload {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<BTreeMap<String, Self>> for Payload {
    fn from(value: BTreeMap<String, Self>) -> Self {
        Self::Object(value)
    }
}

impl<K: Into<String>, V: Into<Self>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_from_json_value_preserves_structure() {
        let payload = Payload::from(json!({"a": [1, "two", null, true]}));
        let Payload::Object(map) = payload else {
            panic!("expected object");
        };
        assert_eq!(
            map.get("a"),
            Some(&Payload::Array(vec![
                Payload::from(1_i64),
                Payload::from("two"),
                Payload::Null,
                Payload::Bool(true),
            ]))
        );
    }

    #[test]
    fn test_datetime_keeps_original_offset() {
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let Payload::DateTime(stored) = Payload::from(dt) else {
            panic!("expected datetime");
        };
        assert_eq!(stored.offset().local_minus_utc(), 5 * 3600 + 1800);
    }

    #[test]
    fn test_utc_datetime_converts_to_zero_offset() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let Payload::DateTime(stored) = Payload::from(dt) else {
            panic!("expected datetime");
        };
        assert_eq!(stored.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Payload::Null.kind(), "Null");
        assert_eq!(Payload::from(1.5).kind(), "Number");
        assert_eq!(Payload::from("x").kind(), "String");
        assert_eq!(Payload::empty_object().kind(), "Object");
        assert_eq!(Payload::from(vec![1_i64]).kind(), "Array");
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        assert_eq!(Payload::from(f64::NAN), Payload::Null);
    }

    #[test]
    fn test_collect_into_object() {
        let payload: Payload = [("is_archived", true)].into_iter().collect();
        assert!(payload.is_container());
        assert_eq!(payload.to_string(), r#"{"is_archived": true}"#);
    }
}
