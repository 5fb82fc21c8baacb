//! Import block generation.

use stencil_codegen::{CodeBuilder, generation::ImportCollector, pipeline::Phase};

use crate::{
    ast::Import,
    context::{ChildRef, GenerationContext},
    error::ImportError,
};

/// The import section of a component file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBlock {
    /// Rendered statements, one per line; empty when nothing is imported
    pub code: String,
    /// Child component names in first-occurrence order
    pub imported: Vec<String>,
}

impl ImportBlock {
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Derives the import block from a component's children.
#[derive(Debug, Clone, Default)]
pub struct ImportBuilder;

impl ImportBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the import block.
    ///
    /// Children that cannot be imported are skipped and reported; only a
    /// component listing itself is an error.
    pub fn build(&self, ctx: &mut GenerationContext<'_>) -> Result<ImportBlock, ImportError> {
        let mut collector = ImportCollector::new();
        let mut skipped: Vec<ChildRef> = Vec::new();

        for child in ctx.children() {
            match child {
                ChildRef::Resolved { name, .. } => {
                    collector.add(&format!("./{}", name), name);
                }
                ChildRef::SelfReference { id } => {
                    return Err(ImportError::SelfReference { id: id.clone() });
                }
                other => {
                    if !skipped.contains(other) {
                        skipped.push(other.clone());
                    }
                }
            }
        }

        for child in &skipped {
            if let Some(reason) = child.skip_reason() {
                ctx.warn(Phase::Import, reason, "children");
            }
        }

        let mut builder = CodeBuilder::javascript();
        if ctx.options.include_react_import {
            builder.emit(&Import::new("react").default("React"));
        }
        for (module, symbols) in collector.iter() {
            let import = symbols
                .iter()
                .fold(Import::new(module), |import, symbol| import.named(symbol));
            builder.emit(&import);
        }

        let imported = collector.symbols();
        log::debug!(
            "imports for `{}`: {} child component(s)",
            ctx.component.id,
            imported.len()
        );

        Ok(ImportBlock {
            code: builder.build().trim_end().to_string(),
            imported,
        })
    }
}
