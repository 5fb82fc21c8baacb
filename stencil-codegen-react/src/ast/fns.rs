//! Function builders.

use stencil_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for a `const name = () => { ... };` arrow function.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    name: String,
    body: Vec<String>,
    empty_body: Option<String>,
}

impl ArrowFn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
            empty_body: None,
        }
    }

    /// Add a statement to the body.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn statements(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.body.extend(lines);
        self
    }

    /// Line rendered in place of an empty body.
    pub fn placeholder(mut self, line: impl Into<String>) -> Self {
        self.empty_body = Some(line.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ArrowFn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = if self.body.is_empty() {
            self.empty_body.iter().map(CodeFragment::line).collect()
        } else {
            self.body.iter().map(CodeFragment::line).collect()
        };

        vec![CodeFragment::block(
            format!("const {} = () => {{", self.name),
            body,
            Some("};".to_string()),
        )]
    }
}

/// Builder for an exported function component returning JSX.
#[derive(Debug, Clone)]
pub struct ComponentFn {
    name: String,
    params: String,
    jsx: String,
}

impl ComponentFn {
    /// `params` is the full parameter list, e.g. `{ label }` or empty.
    pub fn new(name: impl Into<String>, params: impl Into<String>, jsx: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            jsx: jsx.into(),
        }
    }
}

impl Renderable for ComponentFn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("export function {}({}) {{", self.name, self.params),
            vec![CodeFragment::block(
                "return (",
                CodeFragment::lines(&self.jsx),
                Some(");".to_string()),
            )],
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_fn() {
        let code = ArrowFn::new("handleSave")
            .statement("setSaved(true);")
            .statement("alert('Saved');")
            .build();
        assert_eq!(
            code,
            "const handleSave = () => {\n  setSaved(true);\n  alert('Saved');\n};\n"
        );
    }

    #[test]
    fn test_arrow_fn_placeholder() {
        let code = ArrowFn::new("handleClick")
            .placeholder("// No actions defined")
            .build();
        assert_eq!(code, "const handleClick = () => {\n  // No actions defined\n};\n");
    }

    #[test]
    fn test_component_fn_reindents_jsx() {
        let mut builder = CodeBuilder::javascript();
        builder.emit(&ComponentFn::new("Card", "", "<div>\n  <A />\n  <B />\n</div>"));
        assert_eq!(
            builder.build(),
            "export function Card() {\n  return (\n    <div>\n      <A />\n      <B />\n    </div>\n  );\n}\n"
        );
    }
}
