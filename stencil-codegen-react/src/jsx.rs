//! JSX element tree generation.

use stencil_codegen::pipeline::Phase;
use stencil_core::{capitalize, is_identifier, to_camel_case};
use stencil_manifest::{Component, Value};

use crate::{
    ast::{JsxAttribute, JsxBody, JsxElement},
    context::GenerationContext,
    error::JsxError,
    literal::{number_literal, string_literal},
    naming::prop_identifier,
};

/// Tags a `text` component may select through its `as` property.
const TEXT_TAGS: &[&str] = &[
    "p",
    "span",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "label",
    "strong",
    "em",
    "small",
    "blockquote",
    "code",
    "pre",
];

const DEFAULT_TEXT_TAG: &str = "p";

/// Elements that never have content.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Properties rendered as element content, in priority order.
const TEXT_PROPS: &[&str] = &["children", "label", "text", "content"];

/// HTML attribute names and their JSX spelling.
const ATTRIBUTE_RENAMES: &[(&str, &str)] = &[
    ("class", "className"),
    ("for", "htmlFor"),
    ("tabindex", "tabIndex"),
    ("readonly", "readOnly"),
    ("maxlength", "maxLength"),
    ("autocomplete", "autoComplete"),
];

/// Properties forwarded as element attributes (by JSX name).
const STANDARD_ATTRIBUTES: &[&str] = &[
    "alt",
    "autoComplete",
    "autoFocus",
    "checked",
    "className",
    "disabled",
    "download",
    "height",
    "href",
    "htmlFor",
    "id",
    "max",
    "maxLength",
    "min",
    "multiple",
    "name",
    "pattern",
    "placeholder",
    "readOnly",
    "rel",
    "required",
    "role",
    "selected",
    "src",
    "step",
    "tabIndex",
    "target",
    "title",
    "type",
    "value",
    "width",
];

/// The concrete element a component type renders as.
#[derive(Debug, Clone, PartialEq)]
struct ResolvedTag {
    tag: String,
    /// Attribute implied by a virtual type
    implied: Option<JsxAttribute>,
    /// Property consumed by tag selection
    selector: Option<&'static str>,
}

impl ResolvedTag {
    fn plain(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            implied: None,
            selector: None,
        }
    }
}

/// Attributes in emission order; a name is never emitted twice.
#[derive(Debug, Default)]
struct Attributes(Vec<JsxAttribute>);

impl Attributes {
    fn push(&mut self, attribute: JsxAttribute) -> bool {
        if self.0.iter().any(|a| a.name == attribute.name) {
            return false;
        }
        self.0.push(attribute);
        true
    }
}

/// Renders a component's root element.
#[derive(Debug, Clone, Default)]
pub struct JsxBuilder;

impl JsxBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Render the element with every line indented `depth` levels.
    pub fn build(&self, ctx: &mut GenerationContext<'_>, depth: usize) -> Result<String, JsxError> {
        let component = ctx.component;
        let resolved = resolve_tag(ctx)?;
        let is_void = VOID_TAGS.contains(&resolved.tag.as_str());

        let (body, content_prop) = self.content(ctx, resolved.selector);
        let consumed: Vec<&str> = resolved
            .selector
            .into_iter()
            .chain(
                content_prop
                    .as_deref()
                    .filter(|name| !is_void && TEXT_PROPS.contains(name)),
            )
            .collect();

        let mut attributes = Attributes::default();
        if let Some(class_name) = class_name(component)? {
            attributes.push(JsxAttribute::literal("className", class_name));
        }
        if let Some(style) = style_object(component)? {
            attributes.push(JsxAttribute::expression("style", style));
        }
        if let Some(implied) = resolved.implied.clone() {
            attributes.push(implied);
        }
        if let Some(token) = ctx.handler_token() {
            attributes.push(JsxAttribute::expression(token, token));
        }

        let mut properties: Vec<&String> = component.properties.keys().collect();
        properties.sort();
        for name in properties {
            if consumed.contains(&name.as_str()) {
                continue;
            }
            let mapped = jsx_attribute_name(name);
            if !STANDARD_ATTRIBUTES.contains(&mapped) {
                continue;
            }
            if !attributes.push(JsxAttribute::expression(mapped, prop_identifier(name))) {
                ctx.info(
                    Phase::Jsx,
                    format!(
                        "property `{}` not forwarded: attribute `{}` is already set",
                        name, mapped
                    ),
                    &format!("properties.{}", name),
                );
            }
        }

        let mut element = JsxElement::new(&resolved.tag).attrs(attributes.0);
        if is_void {
            if body != JsxBody::Empty {
                ctx.info(
                    Phase::Jsx,
                    format!("<{}> is a void element; its content is ignored", resolved.tag),
                    "",
                );
            }
            element = element.self_closing();
        } else {
            element = element.body(body);
        }

        log::debug!("jsx for `{}`: <{}>", component.id, resolved.tag);
        Ok(element.render(depth))
    }

    /// Select the element content and the property it consumes, if any.
    fn content(
        &self,
        ctx: &mut GenerationContext<'_>,
        selector: Option<&str>,
    ) -> (JsxBody, Option<String>) {
        let component = ctx.component;

        if component.has_children() {
            let mut lines = Vec::new();
            let mut omitted = Vec::new();
            for child in ctx.children() {
                match child.name() {
                    Some(name) => lines.push(format!("<{} />", name)),
                    None => omitted.push(child.id().to_string()),
                }
            }
            for id in omitted {
                ctx.info(
                    Phase::Jsx,
                    format!("child `{}` omitted from the element tree", id),
                    "children",
                );
            }
            let body = if lines.is_empty() {
                JsxBody::Empty
            } else {
                JsxBody::Elements(lines)
            };
            return (body, None);
        }

        if let Some(name) = TEXT_PROPS
            .iter()
            .find(|name| component.properties.contains_key(**name))
        {
            return (
                JsxBody::Expression(prop_identifier(name)),
                Some(name.to_string()),
            );
        }

        match fallback_text_prop(component, selector) {
            Some(name) => (JsxBody::Expression(prop_identifier(name)), Some(name.to_string())),
            None => (JsxBody::Empty, None),
        }
    }
}

/// A string property to use as content when no text property exists.
///
/// Names mentioning `name` or `title` win over any other string property.
fn fallback_text_prop<'c>(component: &'c Component, selector: Option<&str>) -> Option<&'c str> {
    let mut candidates: Vec<&String> = component
        .properties
        .iter()
        .filter(|(name, def)| Some(name.as_str()) != selector && def.is_string())
        .map(|(name, _)| name)
        .collect();
    candidates.sort();

    candidates
        .iter()
        .copied()
        .find(|name| {
            let lower = name.to_ascii_lowercase();
            lower.contains("name") || lower.contains("title")
        })
        .or_else(|| candidates.first().copied())
        .map(String::as_str)
}

fn resolve_tag(ctx: &mut GenerationContext<'_>) -> Result<ResolvedTag, JsxError> {
    let component = ctx.component;
    let resolved = match component.component_type.as_str() {
        "checkbox" => ResolvedTag {
            tag: "input".to_string(),
            implied: Some(JsxAttribute::literal("type", "checkbox")),
            selector: None,
        },
        "icon" => ResolvedTag::plain("span"),
        "container" => ResolvedTag::plain("div"),
        "image" => ResolvedTag::plain("img"),
        "link" => ResolvedTag::plain("a"),
        "text" => {
            let tag = match component.static_value("as") {
                None => DEFAULT_TEXT_TAG,
                Some(Value::String(tag)) if TEXT_TAGS.contains(&tag.as_str()) => tag.as_str(),
                Some(other) => {
                    ctx.warn(
                        Phase::Jsx,
                        format!(
                            "unsupported text element {}; using <{}>",
                            describe(other),
                            DEFAULT_TEXT_TAG
                        ),
                        "properties.as",
                    );
                    DEFAULT_TEXT_TAG
                }
            };
            ResolvedTag {
                tag: tag.to_string(),
                implied: None,
                selector: Some("as"),
            }
        }
        other if is_valid_tag(other) => ResolvedTag::plain(other),
        other => {
            return Err(JsxError::InvalidTag {
                tag: other.to_string(),
            });
        }
    };
    Ok(resolved)
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("`{}`", s),
        other => format!("of type {}", other.type_name()),
    }
}

/// Lower-case HTML or custom element name.
fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }
        _ => false,
    }
}

fn jsx_attribute_name(name: &str) -> &str {
    ATTRIBUTE_RENAMES
        .iter()
        .find(|(html, _)| *html == name)
        .map(|(_, jsx)| *jsx)
        .unwrap_or(name)
}

fn class_name(component: &Component) -> Result<Option<String>, JsxError> {
    let classes: Vec<&str> = component
        .styling
        .base_classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    if let Some(bad) = classes.iter().find(|c| c.contains(['"', '{', '}'])) {
        return Err(JsxError::InvalidClassName {
            class: bad.to_string(),
        });
    }

    Ok((!classes.is_empty()).then(|| classes.join(" ")))
}

/// Render the inline style map as an object literal, e.g. `{ color: 'red' }`.
fn style_object(component: &Component) -> Result<Option<String>, JsxError> {
    let styles = &component.styling.inline_styles;
    if styles.is_empty() {
        return Ok(None);
    }

    let mut entries = Vec::with_capacity(styles.len());
    for (property, value) in styles {
        let value = match value {
            Value::String(s) => string_literal(s),
            Value::Number(n) => number_literal(*n),
            other => {
                return Err(JsxError::UnsupportedStyleValue {
                    property: property.clone(),
                    found: other.type_name(),
                });
            }
        };
        entries.push(format!("{}: {}", style_key(property), value));
    }

    Ok(Some(format!("{{ {} }}", entries.join(", "))))
}

/// Object key for a CSS property.
///
/// Custom properties stay quoted as written; everything else is camel-cased,
/// with vendor prefixes capitalized the way React expects (`-ms-` excepted).
fn style_key(property: &str) -> String {
    if property.starts_with("--") {
        return string_literal(property);
    }

    let camel = to_camel_case(property);
    let key = if property.starts_with('-') && !property.starts_with("-ms-") {
        capitalize(&camel)
    } else {
        camel
    };

    if is_identifier(&key) {
        key
    } else {
        string_literal(&key)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use stencil_codegen::pipeline::Diagnostic;
    use stencil_manifest::{Flow, Manifest, PropertyDef, Styling, Trigger};

    use super::*;
    use crate::{GenerationOptions, context::CLICK_TOKEN};

    fn render(manifest: &Manifest, id: &str) -> (Result<String, JsxError>, Vec<Diagnostic>) {
        render_bound(manifest, id, None)
    }

    fn render_bound(
        manifest: &Manifest,
        id: &str,
        flow: Option<&Flow>,
    ) -> (Result<String, JsxError>, Vec<Diagnostic>) {
        let options = GenerationOptions::default();
        let mut ctx = GenerationContext::new(manifest, manifest.component(id).unwrap(), &options);
        if let Some(flow) = flow {
            ctx.bind_event(flow, CLICK_TOKEN);
        }
        let result = JsxBuilder::new().build(&mut ctx, 0);
        (result, ctx.into_diagnostics().into_vec())
    }

    fn single(component: Component) -> Manifest {
        Manifest::default().with_component(component)
    }

    #[test]
    fn test_button_with_label_and_handler() {
        let manifest = single(
            Component::new("c", "Btn", "button").with_property("label", PropertyDef::fixed("Go")),
        );
        let flow = Flow {
            id: "f".to_string(),
            name: "Go".to_string(),
            trigger: Trigger {
                component_id: "c".to_string(),
                event: "click".to_string(),
            },
            nodes: Vec::new(),
            edges: Vec::new(),
        };
        let (jsx, _) = render_bound(&manifest, "c", Some(&flow));
        assert_eq!(jsx.unwrap(), "<button onClick={onClick}>{label}</button>");
    }

    #[test]
    fn test_attribute_order() {
        let mut styles = IndexMap::new();
        styles.insert("background-color".to_string(), Value::from("red"));
        styles.insert("fontSize".to_string(), Value::from(12.0));
        styles.insert("--accent".to_string(), Value::from("#fff"));
        let manifest = single(
            Component::new("c", "Box", "checkbox")
                .with_styling(Styling {
                    base_classes: vec!["a".to_string(), "  ".to_string(), "b".to_string()],
                    inline_styles: styles,
                })
                .with_property("disabled", PropertyDef::prop(Some(Value::Bool(false))))
                .with_property("readonly", PropertyDef::prop(None))
                .with_property("data", PropertyDef::prop(None)),
        );

        let (jsx, _) = render(&manifest, "c");
        assert_eq!(
            jsx.unwrap(),
            r#"<input className="a b" style={{ backgroundColor: 'red', fontSize: 12, '--accent': '#fff' }} type="checkbox" disabled={disabled} readOnly={readonly} />"#
        );
    }

    #[test]
    fn test_void_element_never_has_children() {
        let manifest = Manifest::default()
            .with_component(
                Component::new("img", "Pic", "image")
                    .with_child("kid")
                    .with_property("label", PropertyDef::fixed("x"))
                    .with_property("alt", PropertyDef::fixed("A picture")),
            )
            .with_component(Component::new("kid", "Kid", "span"));

        let (jsx, diagnostics) = render(&manifest, "img");
        assert_eq!(jsx.unwrap(), "<img alt={alt} />");
        assert!(
            diagnostics
                .iter()
                .any(|d| d.message.contains("void element"))
        );
    }

    #[test]
    fn test_children_in_declared_order() {
        let manifest = Manifest::default()
            .with_component(
                Component::new("page", "Page", "container")
                    .with_child("b")
                    .with_child("missing")
                    .with_child("a")
                    .with_property("label", PropertyDef::fixed("ignored")),
            )
            .with_component(Component::new("a", "Alpha", "div"))
            .with_component(Component::new("b", "Beta", "div"));

        let (jsx, diagnostics) = render(&manifest, "page");
        assert_eq!(jsx.unwrap(), "<div>\n  <Beta />\n  <Alpha />\n</div>");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].phase, Phase::Jsx);
    }

    #[test]
    fn test_text_prop_priority() {
        let manifest = single(
            Component::new("c", "C", "div")
                .with_property("content", PropertyDef::fixed("c"))
                .with_property("label", PropertyDef::fixed("l")),
        );
        assert_eq!(render(&manifest, "c").0.unwrap(), "<div>{label}</div>");
    }

    #[test]
    fn test_fallback_prefers_name_like_props() {
        let manifest = single(
            Component::new("c", "C", "span")
                .with_property("alpha", PropertyDef::fixed("a"))
                .with_property("cardTitle", PropertyDef::fixed("t"))
                .with_property("count", PropertyDef::fixed(1.0)),
        );
        assert_eq!(render(&manifest, "c").0.unwrap(), "<span>{cardTitle}</span>");

        let manifest = single(
            Component::new("c", "C", "span")
                .with_property("zeta", PropertyDef::fixed("z"))
                .with_property("alpha", PropertyDef::fixed("a")),
        );
        assert_eq!(render(&manifest, "c").0.unwrap(), "<span>{alpha}</span>");
    }

    #[test]
    fn test_text_prop_is_not_forwarded() {
        let manifest = single(
            Component::new("c", "C", "button")
                .with_property("type", PropertyDef::fixed("submit"))
                .with_property("value", PropertyDef::prop(None))
                .with_property("label", PropertyDef::fixed("Send")),
        );
        assert_eq!(
            render(&manifest, "c").0.unwrap(),
            "<button type={type} value={value}>{label}</button>"
        );
    }

    #[test]
    fn test_fallback_content_keeps_its_attribute() {
        let manifest = single(
            Component::new("c", "C", "link").with_property("href", PropertyDef::fixed("/home")),
        );
        assert_eq!(render(&manifest, "c").0.unwrap(), "<a href={href}>{href}</a>");

        let manifest = single(
            Component::new("c", "C", "a")
                .with_property("href", PropertyDef::prop(None))
                .with_property("title", PropertyDef::fixed("Home")),
        );
        assert_eq!(
            render(&manifest, "c").0.unwrap(),
            "<a href={href} title={title}>{title}</a>"
        );
    }

    #[test]
    fn test_text_selector() {
        let manifest = single(
            Component::new("c", "C", "text")
                .with_property("as", PropertyDef::fixed("h2"))
                .with_property("text", PropertyDef::fixed("Hello")),
        );
        assert_eq!(render(&manifest, "c").0.unwrap(), "<h2>{text}</h2>");

        let manifest = single(
            Component::new("c", "C", "text").with_property("as", PropertyDef::fixed("script")),
        );
        let (jsx, diagnostics) = render(&manifest, "c");
        assert_eq!(jsx.unwrap(), "<p></p>");
        assert_eq!(diagnostics[0].location.as_deref(), Some("components.c.properties.as"));
    }

    #[test]
    fn test_duplicate_attribute_is_skipped() {
        let manifest = single(
            Component::new("c", "C", "div")
                .with_styling(Styling {
                    base_classes: vec!["card".to_string()],
                    inline_styles: IndexMap::new(),
                })
                .with_property("class", PropertyDef::prop(None)),
        );
        let (jsx, diagnostics) = render(&manifest, "c");
        assert_eq!(jsx.unwrap(), r#"<div className="card"></div>"#);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_invalid_inputs() {
        let manifest = single(Component::new("c", "C", "My Widget"));
        assert!(matches!(render(&manifest, "c").0, Err(JsxError::InvalidTag { .. })));

        let manifest = single(Component::new("c", "C", "div").with_styling(Styling {
            base_classes: vec!["a\"b".to_string()],
            inline_styles: IndexMap::new(),
        }));
        assert!(matches!(
            render(&manifest, "c").0,
            Err(JsxError::InvalidClassName { .. })
        ));

        let mut styles = IndexMap::new();
        styles.insert("margin".to_string(), Value::Array(Vec::new()));
        let manifest = single(Component::new("c", "C", "div").with_styling(Styling {
            base_classes: Vec::new(),
            inline_styles: styles,
        }));
        assert!(matches!(
            render(&manifest, "c").0,
            Err(JsxError::UnsupportedStyleValue { found: "array", .. })
        ));
    }

    #[test]
    fn test_style_keys() {
        assert_eq!(style_key("margin-top"), "marginTop");
        assert_eq!(style_key("-webkit-transition"), "WebkitTransition");
        assert_eq!(style_key("-ms-transform"), "msTransform");
        assert_eq!(style_key("--brand"), "'--brand'");
    }
}
