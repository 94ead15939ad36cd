//! Sequences over `serde_json::Value` documents.

use serde_json::Value;

use fluentq_core::error::{Error, Result};

use crate::enumerable::Enumerable;

impl Enumerable<Value> {
    /// Sequence over a JSON document.
    ///
    /// An array yields its elements, `null` yields an empty sequence. Any other
    /// value is not a sequence and fails with `InvalidSource`.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Self::new(items)),
            Value::Null => Ok(Self::empty()),
            other => Err(Error::InvalidSource(format!(
                "expected a JSON array, found {}",
                kind(&other)
            ))),
        }
    }

    /// Parse `text` as JSON, then as [`Enumerable::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Error::InvalidSource(format!("malformed JSON: {e}")))?;
        Self::from_json(value)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_yields_elements() {
        let seq = Enumerable::from_json(json!([1, "two", null])).unwrap();
        assert_eq!(seq.to_list(), vec![json!(1), json!("two"), Value::Null]);
    }

    #[test]
    fn test_null_is_empty() {
        assert!(Enumerable::from_json(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_and_object_are_rejected() {
        for value in [json!(3), json!("abc"), json!({"a": 1}), json!(true)] {
            let err = Enumerable::from_json(value).unwrap_err();
            assert!(matches!(err, Error::InvalidSource(_)));
        }
    }

    #[test]
    fn test_from_json_str() {
        let seq = Enumerable::from_json_str("[{\"id\": 1}, {\"id\": 2}]").unwrap();
        assert_eq!(seq.length(), 2);
        assert!(matches!(
            Enumerable::from_json_str("[1,"),
            Err(Error::InvalidSource(_))
        ));
    }
}
