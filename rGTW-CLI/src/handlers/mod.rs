//! Shared handlers: API calls turned into display rows.

pub mod organizer;
pub mod registrant;
pub mod session;
pub mod webinar;

use anyhow::{bail, Result};
use rgtw::Reply;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of a successful reply. A failure becomes an error naming the status.
pub fn into_body(reply: Reply) -> Result<Value> {
    match reply {
        Reply::Success { body, .. } => Ok(body),
        Reply::Failure(outcome) => bail!("request failed: {outcome}"),
    }
}

/// Items of a list payload.
///
/// Paged endpoints wrap the list in `_embedded.<name>`; the rest return a
/// bare array.
pub fn items(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("_embedded") {
            Some(Value::Object(embedded)) => embedded
                .into_iter()
                .find_map(|(_, v)| match v {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .unwrap_or_default(),
            _ if map.is_empty() || map.contains_key("page") => Vec::new(),
            _ => vec![Value::Object(map)],
        },
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Decode every item of a list reply.
pub fn decode_items<T: DeserializeOwned>(reply: Reply) -> Result<Vec<T>> {
    items(into_body(reply)?)
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Into::into))
        .collect()
}

/// Decode a single-object reply.
pub fn decode_one<T: DeserializeOwned>(reply: Reply) -> Result<T> {
    Ok(serde_json::from_value(into_body(reply)?)?)
}

/// A key rendered as text. The API sends keys as numbers or strings.
pub fn key_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// String or number field of a JSON object, as text.
pub fn text(value: &Value, key: &str) -> String {
    value.get(key).map(key_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rgtw::CallOutcome;
    use serde_json::json;

    #[test]
    fn test_items_from_array() {
        assert_eq!(items(json!([1, 2])), vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_items_from_paged_payload() {
        let body = json!({
            "_embedded": { "webinars": [{ "webinarKey": "1" }] },
            "page": { "size": 20, "totalElements": 1 }
        });
        assert_eq!(items(body), vec![json!({ "webinarKey": "1" })]);
    }

    #[test]
    fn test_items_from_empty_payloads() {
        assert!(items(Value::Null).is_empty());
        assert!(items(json!({})).is_empty());
        assert!(items(json!({ "_embedded": {} })).is_empty());
    }

    #[test]
    fn test_into_body_failure() {
        let err = into_body(Reply::Failure(CallOutcome::new(404, "Not Found"))).unwrap_err();
        assert_eq!(err.to_string(), "request failed: 404 Not Found");
    }

    #[test]
    fn test_text_accepts_numbers() {
        let value = json!({ "a": "x", "b": 7 });
        assert_eq!(text(&value, "a"), "x");
        assert_eq!(text(&value, "b"), "7");
        assert_eq!(text(&value, "c"), "");
    }
}
