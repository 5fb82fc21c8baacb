//! Final component module assembly.

use stencil_codegen::CodeBuilder;

use crate::{
    GenerationOptions,
    ast::ComponentFn,
    error::AssemblyError,
    imports::ImportBlock,
    props::PropsSignature,
};

/// Everything the assembler stitches together.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyParts<'p> {
    pub component_name: &'p str,
    pub imports: &'p ImportBlock,
    pub header: &'p str,
    pub props: &'p PropsSignature,
    /// Root element, unindented
    pub jsx: &'p str,
}

/// An assembled component file.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledFile {
    pub code: String,
    pub filename: String,
    pub filepath: String,
}

/// Concatenates the generated parts into one module.
#[derive(Debug, Clone, Default)]
pub struct CodeAssembler;

impl CodeAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(
        &self,
        parts: AssemblyParts<'_>,
        options: &GenerationOptions,
    ) -> Result<AssembledFile, AssemblyError> {
        let name = parts.component_name;
        if parts.imports.imported.iter().any(|imported| imported == name) {
            return Err(AssemblyError::NameCollision {
                name: name.to_string(),
            });
        }

        let mut builder = CodeBuilder::javascript();
        if !parts.imports.is_empty() {
            builder.push_lines(&parts.imports.code).push_blank();
        }
        builder
            .push_lines(parts.header)
            .emit(&ComponentFn::new(name, &parts.props.code, parts.jsx));

        let code = builder
            .when(options.include_default_export, |b| {
                b.blank().line(&format!("export default {};", name))
            })
            .build();

        let filename = format!("{}{}", name, options.file_extension);
        let filepath = join_path(&options.component_path, &filename);

        Ok(AssembledFile {
            code,
            filename,
            filepath,
        })
    }
}

fn join_path(base: &str, filename: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", base, filename)
    }
}
