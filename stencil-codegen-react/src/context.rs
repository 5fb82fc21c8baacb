//! Per-call generation state shared by the builders.

use std::collections::{HashMap, HashSet};

use stencil_codegen::pipeline::{Diagnostic, Diagnostics, Phase};
use stencil_manifest::{Component, Flow, Manifest};

use crate::{GenerationOptions, naming::JS_NAMING};

/// Attribute and parameter name used for click bindings.
pub const CLICK_TOKEN: &str = "onClick";

/// A flow bound to an event of the component being generated.
#[derive(Debug, Clone, Copy)]
pub struct EventBinding<'a> {
    /// Name of both the destructured prop and the JSX attribute
    pub token: &'static str,
    pub flow: &'a Flow,
}

/// How one declared child id resolves against the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildRef {
    /// Resolves to an importable component
    Resolved { id: String, name: String },
    /// No component with this id exists
    Missing { id: String },
    /// The component exists but has a blank display name
    Unnamed { id: String },
    /// Sanitizes to a name already taken by an earlier child
    Collision { id: String, name: String },
    /// The component lists itself
    SelfReference { id: String },
}

impl ChildRef {
    pub fn id(&self) -> &str {
        match self {
            ChildRef::Resolved { id, .. }
            | ChildRef::Missing { id }
            | ChildRef::Unnamed { id }
            | ChildRef::Collision { id, .. }
            | ChildRef::SelfReference { id } => id,
        }
    }

    /// The component name to reference, if resolved.
    pub fn name(&self) -> Option<&str> {
        match self {
            ChildRef::Resolved { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Why the child is left out of the output.
    pub fn skip_reason(&self) -> Option<String> {
        match self {
            ChildRef::Resolved { .. } => None,
            ChildRef::Missing { id } => Some(format!("child component `{}` not found", id)),
            ChildRef::Unnamed { id } => {
                Some(format!("child component `{}` has an empty display name", id))
            }
            ChildRef::Collision { id, name } => Some(format!(
                "child component `{}` resolves to `{}`, which is already imported",
                id, name
            )),
            ChildRef::SelfReference { id } => {
                Some(format!("component `{}` lists itself as a child", id))
            }
        }
    }
}

/// State for generating one component.
///
/// A fresh context is built for every generation call, so nothing leaks
/// between components of a batch.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    pub manifest: &'a Manifest,
    pub component: &'a Component,
    pub options: &'a GenerationOptions,
    binding: Option<EventBinding<'a>>,
    children: Vec<ChildRef>,
    diagnostics: Diagnostics,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        manifest: &'a Manifest,
        component: &'a Component,
        options: &'a GenerationOptions,
    ) -> Self {
        Self {
            manifest,
            component,
            options,
            binding: None,
            children: resolve_children(manifest, component),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Bind a flow to this component under the given token.
    pub fn bind_event(&mut self, flow: &'a Flow, token: &'static str) {
        self.binding = Some(EventBinding { token, flow });
    }

    pub fn binding(&self) -> Option<EventBinding<'a>> {
        self.binding
    }

    /// The handler parameter and attribute name, when the component is event-bound.
    pub fn handler_token(&self) -> Option<&'static str> {
        self.binding.map(|b| b.token)
    }

    /// Declared children in order, duplicates included.
    pub fn children(&self) -> &[ChildRef] {
        &self.children
    }

    /// Manifest location of the component, for diagnostics.
    pub fn location(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            format!("components.{}", self.component.id)
        } else {
            format!("components.{}.{}", self.component.id, suffix)
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warn(&mut self, phase: Phase, message: impl Into<String>, suffix: &str) {
        let location = self.location(suffix);
        self.push(Diagnostic::warning(phase, message).at(location));
    }

    pub fn info(&mut self, phase: Phase, message: impl Into<String>, suffix: &str) {
        let location = self.location(suffix);
        self.push(Diagnostic::info(phase, message).at(location));
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Resolve declared child ids in order.
///
/// A repeated id resolves the same way as its first occurrence; a different
/// id whose sanitized name is already taken becomes a collision.
fn resolve_children(manifest: &Manifest, component: &Component) -> Vec<ChildRef> {
    let mut by_id: HashMap<&str, ChildRef> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();

    component
        .children
        .iter()
        .map(|id| {
            if let Some(existing) = by_id.get(id.as_str()) {
                return existing.clone();
            }

            let resolved = if *id == component.id {
                ChildRef::SelfReference { id: id.clone() }
            } else {
                match manifest.component(id) {
                    None => ChildRef::Missing { id: id.clone() },
                    Some(child) if child.display_name.trim().is_empty() => {
                        ChildRef::Unnamed { id: id.clone() }
                    }
                    Some(child) => {
                        let name = JS_NAMING.type_name(&child.display_name);
                        if taken.insert(name.clone()) {
                            ChildRef::Resolved {
                                id: id.clone(),
                                name,
                            }
                        } else {
                            ChildRef::Collision {
                                id: id.clone(),
                                name,
                            }
                        }
                    }
                }
            };

            by_id.insert(id.as_str(), resolved.clone());
            resolved
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest::default()
            .with_component(
                Component::new("root", "Page", "div")
                    .with_child("a")
                    .with_child("b")
                    .with_child("a")
                    .with_child("ghost")
                    .with_child("blank")
                    .with_child("b2")
                    .with_child("root"),
            )
            .with_component(Component::new("a", "Header", "header"))
            .with_component(Component::new("b", "card", "div"))
            .with_component(Component::new("blank", "   ", "div"))
            .with_component(Component::new("b2", "Card!", "div"))
    }

    #[test]
    fn test_resolve_children() {
        let manifest = manifest();
        let options = GenerationOptions::default();
        let ctx = GenerationContext::new(&manifest, manifest.component("root").unwrap(), &options);

        let names: Vec<Option<&str>> = ctx.children().iter().map(ChildRef::name).collect();
        assert_eq!(
            names,
            vec![Some("Header"), Some("Card"), Some("Header"), None, None, None, None]
        );
        assert!(matches!(ctx.children()[3], ChildRef::Missing { .. }));
        assert!(matches!(ctx.children()[4], ChildRef::Unnamed { .. }));
        assert!(matches!(ctx.children()[5], ChildRef::Collision { .. }));
        assert!(matches!(ctx.children()[6], ChildRef::SelfReference { .. }));
    }

    #[test]
    fn test_binding_token() {
        let manifest = manifest();
        let options = GenerationOptions::default();
        let ctx = GenerationContext::new(&manifest, manifest.component("a").unwrap(), &options);
        assert_eq!(ctx.handler_token(), None);
        assert_eq!(ctx.location("children"), "components.a.children");
    }
}
