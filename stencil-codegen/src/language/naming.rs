//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how to transform display names and property names, and how to
/// handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a display name to a type name (e.g., "nav bar" -> "Navbar")
    pub display_to_type: fn(&str) -> String,
    /// Transform a field name to a language-specific identifier
    pub field_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "_class")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.display_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }
}
