//! Boundary validation run once after parsing.
//!
//! Only structural problems are rejected here. Dangling child references are
//! tolerated and reported later by the generators.

use std::collections::HashSet;

use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Validate the manifest after parsing.
pub(super) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    for (key, component) in &manifest.components {
        if component.id != *key {
            return Err(ctx.validation_error(
                format!(
                    "component '{}' is keyed as '{}'; the key must match the id",
                    component.id, key
                ),
                find_span(ctx.src(), key),
            ));
        }
        if component.component_type.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("component '{}' has an empty type", key),
                find_span(ctx.src(), key),
            ));
        }
    }

    for (key, flow) in &manifest.flows {
        if flow.id != *key {
            return Err(ctx.validation_error(
                format!(
                    "flow '{}' is keyed as '{}'; the key must match the id",
                    flow.id, key
                ),
                find_span(ctx.src(), key),
            ));
        }

        if flow.trigger.component_id.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("flow '{}' has a trigger without a componentId", key),
                find_span(ctx.src(), key),
            ));
        }

        let mut seen = HashSet::new();
        for node in &flow.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(ctx.validation_error(
                    format!("flow '{}' declares node '{}' more than once", key, node.id),
                    find_span(ctx.src(), &node.id),
                ));
            }
        }
    }

    Ok(())
}

/// Find the span of a key in the source.
///
/// Looks for a quoted occurrence first (JSON keys and TOML strings), then a
/// dotted TOML table header segment.
fn find_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    for pattern in [format!(".{}]", name), format!(".{}.", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}
