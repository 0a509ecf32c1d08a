//! Serde helpers for amounts and loosely typed form fields.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::units::{parse_lenient_number, round_half_up};

/// Serialize an amount as a 2-decimal string.
pub fn serialize<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&crate::units::format_amount(*amount))
}

/// Accept a form field given either as text or as a JSON number.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientText;

    impl<'de> Visitor<'de> for LenientText {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientText)
}

/// Accept a count (quantity, months) as a number or numeric text.
///
/// Floats round to the nearest integer. Null or unreadable values read as 1.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(round_half_up(lenient_number(&value, 1.0)) as i64)
}

/// Accept a price as a number or numeric text. Null or unreadable values read as 0.
pub fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_number(&value, 0.0))
}

fn lenient_number(value: &Value, fallback: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(fallback),
        Value::String(s) => parse_lenient_number(s, fallback),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_count", default)]
        quantity: i64,
        #[serde(deserialize_with = "lenient_price", default)]
        price: f64,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_lenient_count() {
        assert_eq!(row(r#"{"quantity": 2.6}"#).quantity, 3);
        assert_eq!(row(r#"{"quantity": 2.4}"#).quantity, 2);
        assert_eq!(row(r#"{"quantity": "36"}"#).quantity, 36);
        assert_eq!(row(r#"{"quantity": "4,5"}"#).quantity, 5);
        assert_eq!(row(r#"{"quantity": null}"#).quantity, 1);
        assert_eq!(row(r#"{"quantity": "abc"}"#).quantity, 1);
        assert_eq!(row(r#"{"quantity": true}"#).quantity, 1);
        assert_eq!(row(r#"{"quantity": -2}"#).quantity, -2);
    }

    #[test]
    fn test_lenient_price() {
        assert_eq!(row(r#"{"price": "12,5"}"#).price, 12.5);
        assert_eq!(row(r#"{"price": 80}"#).price, 80.0);
        assert_eq!(row(r#"{"price": null}"#).price, 0.0);
        assert_eq!(row(r#"{"price": [1]}"#).price, 0.0);
    }
}
