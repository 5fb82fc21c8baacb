//! ES module import builder.

use stencil_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::literal::string_literal;

/// Builder for an ES module import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn statement(&self) -> String {
        let from = string_literal(&self.from);
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from {};", def, from),
            (Some(def), false) => {
                format!(
                    "import {}, {{ {} }} from {};",
                    def,
                    self.named.join(", "),
                    from
                )
            }
            (None, false) => format!("import {{ {} }} from {};", self.named.join(", "), from),
            (None, true) => format!("import {};", from),
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("react").default("React").build();
        assert_eq!(i, "import React from 'react';\n");
    }

    #[test]
    fn test_named_import() {
        let i = Import::new("./Header").named("Header").build();
        assert_eq!(i, "import { Header } from './Header';\n");
    }

    #[test]
    fn test_default_and_named_import() {
        let i = Import::new("react")
            .default("React")
            .named("useState")
            .named("useEffect")
            .build();
        assert_eq!(i, "import React, { useState, useEffect } from 'react';\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./styles.css").build();
        assert_eq!(i, "import './styles.css';\n");
    }
}
