//! JavaScript naming conventions for generated React modules.

use stencil_codegen::language::NamingConvention;
use stencil_core::{capitalize, sanitize_component_name, sanitize_identifier, title_case};

/// Prefix of every generated event handler.
pub const HANDLER_PREFIX: &str = "handle";

/// Token used when a flow name yields no usable characters.
pub const HANDLER_FALLBACK: &str = "Click";

fn escape_js_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// JavaScript naming conventions.
pub const JS_NAMING: NamingConvention = NamingConvention {
    // Components use PascalCase
    display_to_type: sanitize_component_name,
    // Props are destructured as plain identifiers
    field_to_name: sanitize_identifier,
    reserved_words: &[
        // ECMAScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        // Strict mode and module code
        "await",
        "implements",
        "interface",
        "let",
        "package",
        "private",
        "protected",
        "public",
        "static",
        "yield",
        // Binding these is a syntax error in strict mode
        "arguments",
        "eval",
        // Names the generated module itself refers to
        "React",
        "props",
    ],
    escape_reserved: escape_js_reserved,
};

/// Identifier a manifest property is destructured as.
///
/// Shared by the props signature and the JSX body so both sides agree.
pub fn prop_identifier(name: &str) -> String {
    JS_NAMING.field_name(name)
}

/// Derive the handler function name for a flow.
///
/// ```
/// use stencil_codegen_react::handler_name;
///
/// assert_eq!(handler_name("Button Click!"), "handleButtonClick");
/// assert_eq!(handler_name(""), "handleClick");
/// ```
pub fn handler_name(flow_name: &str) -> String {
    let cleaned: String = flow_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let body: String = cleaned.split_whitespace().map(title_case).collect();
    if body.is_empty() {
        format!("{}{}", HANDLER_PREFIX, HANDLER_FALLBACK)
    } else {
        format!("{}{}", HANDLER_PREFIX, body)
    }
}

/// Setter name for a state variable (e.g., "count" -> "setCount").
pub fn setter_name(variable: &str) -> String {
    format!("set{}", capitalize(variable))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_naming_type() {
        assert_eq!(JS_NAMING.type_name("nav bar"), "Navbar");
        assert_eq!(JS_NAMING.type_name("123abc"), "_123abc");
    }

    #[test]
    fn test_js_naming_field() {
        assert_eq!(JS_NAMING.field_name("user-name"), "user_name");
        assert_eq!(JS_NAMING.field_name("class"), "_class");
        assert_eq!(JS_NAMING.field_name("label"), "label");
    }

    #[test]
    fn test_js_reserved_words() {
        assert!(JS_NAMING.is_reserved("class"));
        assert!(JS_NAMING.is_reserved("await"));
        assert!(!JS_NAMING.is_reserved("label"));
    }

    #[test]
    fn test_component_name_is_idempotent() {
        for input in ["my button", "123abc", "", "__x", "Ünïcode name", "a-b-c"] {
            let once = JS_NAMING.type_name(input);
            assert_eq!(JS_NAMING.type_name(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_prop_identifier_is_idempotent() {
        for input in ["class", "aria-label", "1st", "", "$ref", "data value"] {
            let once = prop_identifier(input);
            assert_eq!(prop_identifier(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_handler_name() {
        assert_eq!(handler_name("Say Hi"), "handleSayHi");
        assert_eq!(handler_name("Button Click!"), "handleButtonClick");
        assert_eq!(handler_name("  submit   FORM "), "handleSubmitForm");
        assert_eq!(handler_name("!!!"), "handleClick");
        assert_eq!(handler_name(""), "handleClick");
    }

    #[test]
    fn test_setter_name() {
        assert_eq!(setter_name("count"), "setCount");
        assert_eq!(setter_name("isOpen"), "setIsOpen");
    }
}
