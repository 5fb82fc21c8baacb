//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental assembly.
///
/// # Example (Consuming API)
///
/// ```
/// use stencil_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::javascript()
///     .line("function Hello() {}")
///     .when(true, |b| b.blank().line("export default Hello;"))
///     .build();
///
/// assert_eq!(code, "function Hello() {}\n\nexport default Hello;\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use stencil_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::javascript();
/// builder
///     .push_line("return (")
///     .push_indent()
///     .push_line("<div />")
///     .push_dedent()
///     .push_line(");");
/// assert_eq!(builder.build(), "return (\n  <div />\n);\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/JSX default).
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add several lines, each with current indentation (mutable).
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::javascript().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::javascript();
        builder
            .push_line("function main() {")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "function main() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::javascript();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_conditional() {
        let with_export = CodeBuilder::javascript()
            .line("function Foo() {}")
            .when(true, |b| b.blank().line("export default Foo;"))
            .build();
        let without_export = CodeBuilder::javascript()
            .line("function Foo() {}")
            .when(false, |b| b.blank().line("export default Foo;"))
            .build();

        assert_eq!(with_export, "function Foo() {}\n\nexport default Foo;\n");
        assert_eq!(without_export, "function Foo() {}\n");
    }

    #[test]
    fn test_push_lines_keeps_relative_indent() {
        let mut builder = CodeBuilder::javascript();
        builder.push_indent().push_lines("<div>\n  <A />\n</div>");
        assert_eq!(builder.build(), "  <div>\n    <A />\n  </div>\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "export function App() {",
                    vec![CodeFragment::line("return null;")],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::javascript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "export function App() {\n  return null;\n}\n"
        );
    }

    #[test]
    fn test_emit_indent_fragment() {
        let mut builder = CodeBuilder::javascript();
        builder.apply_fragment(CodeFragment::Indent(vec![CodeFragment::line("inner")]));
        builder.apply_fragment(CodeFragment::Blank);
        assert_eq!(builder.build(), "  inner\n\n");
    }
}
