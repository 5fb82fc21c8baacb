//! Provenance header placed above each generated component.

use chrono::{DateTime, SecondsFormat, Utc};
use stencil_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Schema level written to `@level`.
pub const HEADER_LEVEL: u32 = 1;

/// Marker identifying files owned by the generator.
pub const GENERATED_MARKER: &str = "@generated stencil";

/// Format a timestamp the way headers and metadata record it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds the `/** @generated ... */` block.
#[derive(Debug, Clone)]
pub struct CommentHeaderBuilder {
    level: u32,
}

impl Default for CommentHeaderBuilder {
    fn default() -> Self {
        Self {
            level: HEADER_LEVEL,
        }
    }
}

impl CommentHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn build(&self, component_id: &str, generated_at: DateTime<Utc>) -> String {
        let header = CommentHeader {
            // An id must not be able to close the comment early
            component_id: component_id.replace("*/", "* /"),
            level: self.level,
            generated_at: format_timestamp(generated_at),
        };
        let mut builder = CodeBuilder::javascript();
        builder.emit(&header);
        builder.build().trim_end().to_string()
    }
}

struct CommentHeader {
    component_id: String,
    level: u32,
    generated_at: String,
}

impl Renderable for CommentHeader {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line("/**"),
            CodeFragment::line(format!(" * {}", GENERATED_MARKER)),
            CodeFragment::line(format!(" * @component-id {}", self.component_id)),
            CodeFragment::line(format!(" * @level {}", self.level)),
            CodeFragment::line(format!(" * @generated-at {}", self.generated_at)),
            CodeFragment::line(" * DO NOT EDIT: changes are overwritten on the next generation."),
            CodeFragment::line(" */"),
        ]
    }
}
