//! Model output normalization.
//!
//! Hosted models answer in different shapes: summarizers and captioners
//! return `[{"summary_text": ...}]`, speech-to-text returns `{"text": ...}`,
//! and some endpoints return a bare string. [`ModelOutput`] classifies a
//! gateway response once, and [`ModelOutput::text_field`] is the single
//! dispatch every call site uses to pull out its string.

use lumen_gateway::InferenceResponse;
use serde_json::{Map, Value};

/// Shape of a model response.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    Text(String),
    Object(Map<String, Value>),
    Array(Vec<Value>),
    /// Binary bodies, numbers, booleans, null.
    Opaque,
}

impl From<InferenceResponse> for ModelOutput {
    fn from(response: InferenceResponse) -> Self {
        match response {
            InferenceResponse::Json(Value::String(s)) => Self::Text(s),
            InferenceResponse::Json(Value::Object(map)) => Self::Object(map),
            InferenceResponse::Json(Value::Array(items)) => Self::Array(items),
            InferenceResponse::Json(_) | InferenceResponse::Binary { .. } => Self::Opaque,
        }
    }
}

impl ModelOutput {
    /// Resolve the string stored under `field`.
    ///
    /// - `Text` resolves to itself.
    /// - `Object` resolves to `field` when it holds a string.
    /// - `Array` resolves its first element by the same rules.
    ///
    /// Empty strings count as absent.
    #[must_use]
    pub fn text_field(&self, field: &str) -> Option<&str> {
        match self {
            Self::Text(s) => non_empty(s),
            Self::Object(map) => object_field(map, field),
            Self::Array(items) => match items.first()? {
                Value::String(s) => non_empty(s),
                Value::Object(map) => object_field(map, field),
                _ => None,
            },
            Self::Opaque => None,
        }
    }

    /// [`Self::text_field`] with a fixed fallback; an unexpected shape is not an error.
    #[must_use]
    pub fn text_or(&self, field: &str, placeholder: &str) -> String {
        self.text_field(field).unwrap_or(placeholder).to_string()
    }
}

fn object_field<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    map.get(field).and_then(Value::as_str).and_then(non_empty)
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn output(value: Value) -> ModelOutput {
        ModelOutput::from(InferenceResponse::Json(value))
    }

    #[test]
    fn array_of_one_object() {
        let out = output(json!([{"summary_text": "Short."}]));
        assert_eq!(out.text_field("summary_text"), Some("Short."));
    }

    #[test]
    fn single_object() {
        let out = output(json!({"text": "hello"}));
        assert_eq!(out.text_field("text"), Some("hello"));
        assert_eq!(out.text_field("summary_text"), None);
    }

    #[test]
    fn bare_string() {
        let out = output(json!("just text"));
        assert!(matches!(out, ModelOutput::Text(_)));
        assert_eq!(out.text_field("anything"), Some("just text"));
    }

    #[test]
    fn array_of_strings_uses_first() {
        let out = output(json!(["first", "second"]));
        assert_eq!(out.text_field("text"), Some("first"));
    }

    #[test]
    fn empty_and_non_string_fields_are_absent() {
        assert_eq!(output(json!({"text": ""})).text_field("text"), None);
        assert_eq!(output(json!({"text": 42})).text_field("text"), None);
        assert_eq!(output(json!([])).text_field("text"), None);
        assert_eq!(output(json!(null)).text_field("text"), None);
    }

    #[test]
    fn binary_is_opaque() {
        let out = ModelOutput::from(InferenceResponse::Binary {
            content_type: Some("audio/flac".into()),
            bytes: vec![1, 2],
        });
        assert_eq!(out, ModelOutput::Opaque);
        assert_eq!(out.text_or("text", "fallback"), "fallback");
    }
}
