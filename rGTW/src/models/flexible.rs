//! Deserializers for fields the API returns either as strings or numbers.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Accept a string, a number or `null` (as empty).
pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Accept an integer, a numeric string or `null` (as zero).
pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    match Value::deserialize(d)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("expected integer, got {n}"))),
        Value::String(s) => s.trim().parse().map_err(de::Error::custom),
        Value::Null => Ok(0),
        other => Err(de::Error::custom(format!("expected integer, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "string")]
        key: String,
        #[serde(deserialize_with = "int")]
        ttl: i64,
    }

    #[test]
    fn test_flexible_fields() {
        let s: Sample = serde_json::from_str(r#"{"key": 42, "ttl": "60"}"#).unwrap();
        assert_eq!(s.key, "42");
        assert_eq!(s.ttl, 60);

        let s: Sample = serde_json::from_str(r#"{"key": null, "ttl": null}"#).unwrap();
        assert_eq!(s.key, "");
        assert_eq!(s.ttl, 0);

        assert!(serde_json::from_str::<Sample>(r#"{"key": [], "ttl": 1}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"key": "a", "ttl": "soon"}"#).is_err());
    }
}
