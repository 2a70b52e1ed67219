//! Typed model of the JSON-like documents the gateway signs.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::errors::SigningError;

/// A node of a signable document.
///
/// Object members keep their source order. Date-times are kept apart from
/// plain strings because they render in a canonical UTC form.
#[derive(Debug, Clone, PartialEq)]
pub enum SignValue {
    Object(Vec<(String, SignValue)>),
    Array(Vec<SignValue>),
    String(String),
    Integer(i128),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl SignValue {
    /// Builds a document from parsed JSON, keeping null members.
    ///
    /// Strings in ISO 8601 date-time form become [`SignValue::DateTime`].
    pub fn from_json(value: &Value) -> Self {
        Self::convert(value, false)
    }

    /// Serializes `value` and builds a document from it, dropping every
    /// null-valued object member.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, SigningError> {
        let json = serde_json::to_value(value)?;
        Ok(Self::convert(&json, true))
    }

    /// Returns true for an object with at least one member.
    pub fn is_populated_object(&self) -> bool {
        matches!(self, SignValue::Object(members) if !members.is_empty())
    }

    fn convert(value: &Value, drop_nulls: bool) -> Self {
        match value {
            Value::Object(map) => SignValue::Object(
                map.iter()
                    .filter(|(_, v)| !(drop_nulls && v.is_null()))
                    .map(|(k, v)| (k.clone(), Self::convert(v, drop_nulls)))
                    .collect(),
            ),
            Value::Array(items) => {
                SignValue::Array(items.iter().map(|v| Self::convert(v, drop_nulls)).collect())
            }
            Value::String(s) => match parse_date_time(s) {
                Some(dt) => SignValue::DateTime(dt),
                None => SignValue::String(s.clone()),
            },
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SignValue::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    SignValue::Integer(i128::from(u))
                } else {
                    SignValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::Bool(b) => SignValue::Bool(*b),
            Value::Null => SignValue::Null,
        }
    }
}

/// Recognizes `yyyy-MM-ddTHH:mm:ss[.fff][Z|±hh:mm|±hhmm]`.
///
/// Values without an offset are taken as UTC.
fn parse_date_time(s: &str) -> Option<DateTime<Utc>> {
    let bytes = s.as_bytes();
    if bytes.len() < 19 || bytes[4] != b'-' || bytes[7] != b'-' || bytes[10] != b'T' {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn json_scalars_map_to_matching_variants() {
        let doc = SignValue::from_json(&json!({
            "s": "text",
            "i": -4,
            "u": 18446744073709551615u64,
            "f": 1.5,
            "b": true,
            "n": null
        }));

        let SignValue::Object(members) = doc else {
            panic!("expected object");
        };
        let get = |k: &str| members.iter().find(|(key, _)| key == k).map(|(_, v)| v.clone());
        assert_eq!(get("s"), Some(SignValue::String("text".into())));
        assert_eq!(get("i"), Some(SignValue::Integer(-4)));
        assert_eq!(get("u"), Some(SignValue::Integer(18446744073709551615)));
        assert_eq!(get("f"), Some(SignValue::Float(1.5)));
        assert_eq!(get("b"), Some(SignValue::Bool(true)));
        assert_eq!(get("n"), Some(SignValue::Null));
    }

    #[test]
    fn iso_strings_become_date_times() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 7, 30, 0).unwrap();

        for s in [
            "2024-01-15T07:30:00Z",
            "2024-01-15T10:30:00+03:00",
            "2024-01-15T07:30:00+0000",
            "2024-01-15T07:30:00",
        ] {
            assert_eq!(
                SignValue::from_json(&json!(s)),
                SignValue::DateTime(expected),
                "input {}",
                s
            );
        }
    }

    #[test]
    fn date_only_and_free_text_stay_strings() {
        assert_eq!(
            SignValue::from_json(&json!("2024-01-15")),
            SignValue::String("2024-01-15".into())
        );
        assert_eq!(
            SignValue::from_json(&json!("Refund for the order '42'.")),
            SignValue::String("Refund for the order '42'.".into())
        );
    }

    #[test]
    fn serializable_drops_null_members_at_every_depth() {
        #[derive(Serialize)]
        struct Inner {
            amount: Option<i64>,
            description: &'static str,
        }
        #[derive(Serialize)]
        struct Outer {
            payment: Inner,
            signature: Option<String>,
        }

        let doc = SignValue::from_serializable(&Outer {
            payment: Inner {
                amount: None,
                description: "d",
            },
            signature: None,
        })
        .unwrap();

        assert_eq!(
            doc,
            SignValue::Object(vec![(
                "payment".into(),
                SignValue::Object(vec![("description".into(), SignValue::String("d".into()))])
            )])
        );
    }

    #[test]
    fn null_array_items_survive_null_dropping() {
        let doc = SignValue::from_serializable(&json!({ "a": [null, 1] })).unwrap();
        assert_eq!(
            doc,
            SignValue::Object(vec![(
                "a".into(),
                SignValue::Array(vec![SignValue::Null, SignValue::Integer(1)])
            )])
        );
    }

    #[test]
    fn populated_object_detection() {
        assert!(SignValue::from_json(&json!({"a": 1})).is_populated_object());
        assert!(!SignValue::from_json(&json!({})).is_populated_object());
        assert!(!SignValue::from_json(&json!([1])).is_populated_object());
    }
}
