//! Tolerant serde helpers for loosely typed server payloads.
//!
//! The backend is not consistent about scalar types: mobile numbers and
//! pincodes arrive as strings or numbers, amounts sometimes as strings.
//! These helpers accept either and map `null` to `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// `true`/`false`, `"true"`/`"false"`, `1`/`0`. Anything else is `false`.
pub fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    })
}

/// A `None`-aware, trimmed view of an optional string field.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_string")]
        mobile: Option<String>,
        #[serde(default, deserialize_with = "opt_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "bool_or_false")]
        active: bool,
    }

    #[test]
    fn test_numbers_and_strings() {
        let p: Probe =
            serde_json::from_str(r#"{"mobile": 9876543210, "amount": "125.5", "active": "true"}"#)
                .unwrap();
        assert_eq!(p.mobile.as_deref(), Some("9876543210"));
        assert_eq!(p.amount, Some(125.5));
        assert!(p.active);
    }

    #[test]
    fn test_missing_and_null() {
        let p: Probe = serde_json::from_str(r#"{"mobile": null}"#).unwrap();
        assert_eq!(p.mobile, None);
        assert_eq!(p.amount, None);
        assert!(!p.active);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(Some(" a ")), Some("a"));
        assert_eq!(non_empty(None), None);
    }
}
