//! Literal values carried by component properties, styles and flow nodes.

use indexmap::IndexMap;
use serde::Deserialize;

/// A literal value from the manifest.
///
/// Numbers are stored as `f64` so that TOML's `nan` and `inf` survive
/// ingestion; JSON integers are widened on the way in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Short name of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_json_scalars() {
        let values: Vec<Value> = serde_json::from_str(r#"[null, true, 3, 2.5, "hi"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Number(3.0),
                Value::Number(2.5),
                Value::String("hi".to_string()),
            ]
        );
    }

    #[test]
    fn test_deserialize_nested_preserves_key_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": [1, "x"]}"#).unwrap();
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_deserialize_toml_special_floats() {
        #[derive(Deserialize)]
        struct Holder {
            a: Value,
            b: Value,
        }

        let holder: Holder = toml::from_str("a = nan\nb = -inf\n").unwrap();
        assert!(matches!(holder.a, Value::Number(n) if n.is_nan()));
        assert_eq!(holder.b, Value::Number(f64::NEG_INFINITY));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::from(1.0).type_name(), "number");
        assert_eq!(Value::Null.type_name(), "null");
    }
}
