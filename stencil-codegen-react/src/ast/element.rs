//! JSX element builder.

use stencil_codegen::Indent;

/// Longest body kept on the same line as its tags.
pub const INLINE_BODY_LIMIT: usize = 60;

/// Value of a JSX attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Quoted literal: `name="value"`
    Literal(String),
    /// Braced expression: `name={value}`
    Expression(String),
}

/// A single JSX attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxAttribute {
    pub name: String,
    pub value: AttrValue,
}

impl JsxAttribute {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttrValue::Literal(value.into()),
        }
    }

    pub fn expression(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttrValue::Expression(expr.into()),
        }
    }

    fn render(&self) -> String {
        match &self.value {
            AttrValue::Literal(v) => format!("{}=\"{}\"", self.name, v),
            AttrValue::Expression(e) => format!("{}={{{}}}", self.name, e),
        }
    }
}

/// Content between the opening and closing tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JsxBody {
    #[default]
    Empty,
    /// A single expression child, rendered as `{expr}`
    Expression(String),
    /// Child elements, one per line
    Elements(Vec<String>),
}

impl JsxBody {
    fn text(&self) -> String {
        match self {
            JsxBody::Empty => String::new(),
            JsxBody::Expression(expr) => format!("{{{}}}", expr),
            JsxBody::Elements(lines) => lines.join("\n"),
        }
    }
}

/// Builder for a JSX element.
///
/// # Example
///
/// ```
/// use stencil_codegen_react::ast::{JsxAttribute, JsxBody, JsxElement};
///
/// let jsx = JsxElement::new("button")
///     .attr(JsxAttribute::expression("onClick", "onClick"))
///     .body(JsxBody::Expression("label".into()))
///     .render(0);
///
/// assert_eq!(jsx, "<button onClick={onClick}>{label}</button>");
/// ```
#[derive(Debug, Clone)]
pub struct JsxElement {
    tag: String,
    attributes: Vec<JsxAttribute>,
    body: JsxBody,
    self_closing: bool,
    indent: Indent,
}

impl JsxElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            body: JsxBody::Empty,
            self_closing: false,
            indent: Indent::JAVASCRIPT,
        }
    }

    pub fn attr(mut self, attribute: JsxAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attrs(mut self, attributes: impl IntoIterator<Item = JsxAttribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn body(mut self, body: JsxBody) -> Self {
        self.body = body;
        self
    }

    /// Render as `<tag />`, dropping any body.
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    fn open_tag(&self) -> String {
        let mut tag = format!("<{}", self.tag);
        for attribute in &self.attributes {
            tag.push(' ');
            tag.push_str(&attribute.render());
        }
        tag
    }

    /// Render the element with every line indented `depth` levels.
    pub fn render(&self, depth: usize) -> String {
        let pad = self.indent.repeat(depth);
        let open = self.open_tag();

        if self.self_closing {
            return format!("{}{} />", pad, open);
        }

        let body = self.body.text();
        if body.is_empty() {
            return format!("{}{}></{}>", pad, open, self.tag);
        }
        if !body.contains('\n') && body.chars().count() <= INLINE_BODY_LIMIT {
            return format!("{}{}>{}</{}>", pad, open, body, self.tag);
        }

        let inner = self.indent.repeat(depth + 1);
        let mut lines = vec![format!("{}{}>", pad, open)];
        lines.extend(body.lines().map(|line| format!("{}{}", inner, line)));
        lines.push(format!("{}</{}>", pad, self.tag));
        lines.join("\n")
    }
}
