//! Lenient field readers: hand-edited resume files mix strings and numbers.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a string or a number, got {other}"
        ))),
    }
}

pub fn level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(D::Error::custom)?,
        Value::Null => 0.0,
        other => return Err(D::Error::custom(format!("invalid skill level {other}"))),
    };

    Ok(value.round().max(0.0) as u32)
}
