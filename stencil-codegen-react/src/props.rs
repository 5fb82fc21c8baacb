//! Props destructuring signature.

use indexmap::IndexMap;

use crate::{
    context::GenerationContext, error::PropsError, literal::js_literal, naming::prop_identifier,
};

/// The destructured parameter of a component function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropsSignature {
    /// `{ a = 'x', b, onClick }`, or empty when there is nothing to destructure
    pub code: String,
    /// Destructured data prop identifiers, sorted by property name
    pub names: Vec<String>,
    pub has_props: bool,
}

/// Derives the parameter signature from a component's properties.
#[derive(Debug, Clone, Default)]
pub struct PropsBuilder;

impl PropsBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, ctx: &GenerationContext<'_>) -> Result<PropsSignature, PropsError> {
        let mut properties: Vec<_> = ctx.component.properties.iter().collect();
        properties.sort_by(|a, b| a.0.cmp(b.0));

        // identifier -> property it came from
        let mut seen: IndexMap<String, &str> = IndexMap::new();
        let mut entries = Vec::with_capacity(properties.len() + 1);

        for (name, def) in properties {
            let identifier = prop_identifier(name);
            if let Some(first) = seen.get(&identifier) {
                return Err(PropsError::DuplicateIdentifier {
                    identifier,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }

            let entry = match def.default_value() {
                Some(value) => format!("{} = {}", identifier, js_literal(value)),
                None => identifier.clone(),
            };
            entries.push(entry);
            seen.insert(identifier, name);
        }

        if let Some(token) = ctx.handler_token() {
            if let Some(property) = seen.get(token) {
                return Err(PropsError::HandlerCollision {
                    property: property.to_string(),
                    token: token.to_string(),
                });
            }
            entries.push(token.to_string());
        }

        let names: Vec<String> = seen.into_keys().collect();
        let code = if entries.is_empty() {
            String::new()
        } else {
            format!("{{ {} }}", entries.join(", "))
        };

        Ok(PropsSignature {
            code,
            has_props: !names.is_empty(),
            names,
        })
    }
}
