//! Generation phases.

use serde::Serialize;

/// A stage of component generation.
///
/// Errors and diagnostics are tagged with the phase that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Input lookups before generation starts (unknown component ids).
    Validation,
    /// Child component import statements.
    Import,
    /// Props destructuring signature.
    Props,
    /// Event flow handler compilation.
    Flow,
    /// JSX element tree.
    Jsx,
    /// Generated file header.
    Header,
    /// Final module text assembly.
    Assembly,
    /// External formatter pass.
    Format,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Validation => "validation",
            Phase::Import => "import",
            Phase::Props => "props",
            Phase::Flow => "flow",
            Phase::Jsx => "jsx",
            Phase::Header => "header",
            Phase::Assembly => "assembly",
            Phase::Format => "format",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_serializes_lowercase() {
        let json = serde_json::to_string(&Phase::Jsx).unwrap();
        assert_eq!(json, "\"jsx\"");
        assert_eq!(Phase::Validation.to_string(), "validation");
    }
}
