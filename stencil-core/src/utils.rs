//! Identifier sanitizers and case helpers for code generation.
//!
//! Every function here is pure, and the sanitizers are idempotent:
//! feeding their output back in returns it unchanged.

/// Name used when a component display name sanitizes to nothing.
pub const FALLBACK_COMPONENT_NAME: &str = "Component";

/// Name used when a property name sanitizes to nothing.
pub const FALLBACK_IDENTIFIER: &str = "prop";

/// Convert a display name into a PascalCase component identifier.
///
/// Characters other than ASCII letters, digits and `_` are stripped, the
/// first letter is upper-cased and a digit-leading result gets a `_` prefix.
///
/// ```
/// use stencil_core::sanitize_component_name;
///
/// assert_eq!(sanitize_component_name("my button"), "Mybutton");
/// assert_eq!(sanitize_component_name("123abc"), "_123abc");
/// assert_eq!(sanitize_component_name("!!!"), "Component");
/// ```
pub fn sanitize_component_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match stripped.chars().next() {
        None => FALLBACK_COMPONENT_NAME.to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", stripped),
        Some(_) => capitalize(&stripped),
    }
}

/// Convert an arbitrary property name into a JavaScript identifier.
///
/// Invalid characters become `_`; a digit-leading result gets a `_` prefix.
/// Reserved words are not handled here, see the language naming conventions.
pub fn sanitize_identifier(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    match replaced.chars().next() {
        None => FALLBACK_IDENTIFIER.to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", replaced),
        Some(_) => replaced,
    }
}

/// Check whether a string is already a plain JavaScript identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Upper-case the first character and lower-case the rest (e.g., "hELLO" -> "Hello").
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Convert a kebab or snake case string to camelCase (e.g., "background-color" -> "backgroundColor").
///
/// Strings without separators are returned unchanged, so camelCase input passes through.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '-' || c == '_' {
            upper_next = !result.is_empty();
            continue;
        }
        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
