//! JavaScript literal formatting for manifest values.

use stencil_manifest::Value;

/// Format a value as a JavaScript expression literal.
///
/// Strings are single-quoted, numbers keep JavaScript's spelling for the
/// non-finite cases, and arrays and objects become JSON.
///
/// ```
/// use stencil_codegen_react::js_literal;
/// use stencil_manifest::Value;
///
/// assert_eq!(js_literal(&Value::from("it's")), r"'it\'s'");
/// assert_eq!(js_literal(&Value::from(3.0)), "3");
/// assert_eq!(js_literal(&Value::from(f64::NAN)), "NaN");
/// ```
pub fn js_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_literal(*n),
        Value::String(s) => string_literal(s),
        Value::Array(_) | Value::Object(_) => to_json(value).to_string(),
    }
}

/// Single-quoted JavaScript string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Line terminators and other controls are not allowed raw in a literal
            '\u{2028}' | '\u{2029}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// JavaScript number literal.
pub fn number_literal(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // Covers negative zero
        "0".to_string()
    } else {
        n.to_string()
    }
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => json_number(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        ),
    }
}

/// Integral values print without a fraction and non-finite values become
/// `null`, matching `JSON.stringify`.
fn json_number(n: f64) -> serde_json::Value {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    /// Minimal reader for the literals produced above.
    fn unescape(literal: &str) -> String {
        let inner = &literal[1..literal.len() - 1];
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('u') => {
                    let hex: String = chars.by_ref().take(4).collect();
                    let code = u32::from_str_radix(&hex, 16).unwrap();
                    out.push(char::from_u32(code).unwrap());
                }
                Some(other) => out.push(other),
                None => panic!("dangling escape"),
            }
        }
        out
    }

    #[test]
    fn test_string_escapes() {
        let input = "It's a \"test\"\nline2";
        let literal = string_literal(input);
        assert_eq!(literal, r#"'It\'s a "test"\nline2'"#);
        assert_eq!(unescape(&literal), input);
    }

    #[test]
    fn test_string_round_trips_controls() {
        let input = "tab\there\r\\end\u{0007}\u{2028}";
        assert_eq!(unescape(&string_literal(input)), input);
        assert!(!string_literal(input).contains('\u{2028}'));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(number_literal(42.0), "42");
        assert_eq!(number_literal(-1.5), "-1.5");
        assert_eq!(number_literal(-0.0), "0");
        assert_eq!(number_literal(f64::NAN), "NaN");
        assert_eq!(number_literal(f64::INFINITY), "Infinity");
        assert_eq!(number_literal(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(js_literal(&Value::Null), "null");
        assert_eq!(js_literal(&Value::Bool(false)), "false");
    }

    #[test]
    fn test_json_fallback_keeps_key_order() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), Value::from(1.0));
        map.insert("a".to_string(), Value::Array(vec![Value::from("x"), Value::from(f64::NAN)]));
        assert_eq!(js_literal(&Value::Object(map)), r#"{"z":1,"a":["x",null]}"#);
    }
}
