//! Bake operation - write generated components and handlers.

use std::path::Path;

use eyre::{Context, Result};
use stencil_codegen::CodeBuilder;
use stencil_codegen_react::{
    FlowGenerationResult, Formatter, GENERATED_MARKER, GenerationOptions, Generator,
    PrettierFormatter,
};
use stencil_core::{File, Overwrite, WriteResult};
use stencil_manifest::Manifest;

use crate::reports::{BakeOutcome, BakeReport, PreviewFile, WrittenResult};

/// Base name of the shared handler module.
const HANDLERS_MODULE: &str = "handlers";

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    pub output_dir: &'a Path,
    /// Component ids to generate; all components when empty.
    pub components: &'a [String],
    /// Preview without writing files.
    pub dry_run: bool,
    /// Leave existing files untouched.
    pub keep_existing: bool,
    /// Run the handler module through Prettier as well.
    pub prettier: bool,
}

/// Execute the bake operation.
pub fn bake(manifest: &Manifest, generator: &Generator, opts: BakeOptions) -> Result<BakeReport> {
    let components = if opts.components.is_empty() {
        generator.generate_all(manifest)
    } else {
        generator.generate_selected(manifest, opts.components)
    };
    let flows = generator.compile_flows(manifest);

    let mut files: Vec<PreviewFile> = components
        .results
        .iter()
        .filter(|result| result.success)
        .map(|result| PreviewFile {
            path: result.filepath.clone(),
            content: result.code.clone(),
        })
        .collect();
    if !flows.handlers.is_empty() {
        files.push(handlers_file(&flows, generator.options(), opts.prettier));
    }

    let outcome = if opts.dry_run {
        BakeOutcome::Preview(files)
    } else {
        let overwrite = if opts.keep_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        BakeOutcome::Written(write_files(opts.output_dir, files, overwrite)?)
    };

    Ok(BakeReport {
        components,
        flows,
        outcome,
    })
}

fn write_files(
    output_dir: &Path,
    files: Vec<PreviewFile>,
    overwrite: Overwrite,
) -> Result<WrittenResult> {
    let mut result = WrittenResult {
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    };

    for file in files {
        let path = output_dir.join(&file.path);
        let status = File::new(&path, file.content)
            .overwrite(overwrite)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        match status {
            WriteResult::Written => result.written.push(file.path),
            WriteResult::Skipped => result.kept.push(file.path),
        }
    }

    Ok(result)
}

/// Collect every compiled handler into one module.
fn handlers_file(
    flows: &FlowGenerationResult,
    options: &GenerationOptions,
    prettier: bool,
) -> PreviewFile {
    let filename = format!("{}{}", HANDLERS_MODULE, options.file_extension);
    let names: Vec<&str> = flows.handlers.iter().map(|h| h.name.as_str()).collect();

    let mut builder = CodeBuilder::javascript();
    builder
        .push_line("/**")
        .push_line(&format!(" * {}", GENERATED_MARKER))
        .push_line(" * Event handlers compiled from the manifest flows.")
        .push_line(" */");
    for handler in &flows.handlers {
        builder.push_blank().push_lines(&handler.code);
    }
    let mut content = builder
        .blank()
        .line(&format!("export {{ {} }};", names.join(", ")))
        .build();

    if prettier {
        match PrettierFormatter::npx().format(&content, &filename, &options.formatter_config()) {
            Ok(formatted) => content = formatted,
            Err(err) => log::warn!("formatting {} failed, keeping unformatted code: {}", filename, err),
        }
    }

    let dir = options.component_path.trim_end_matches('/');
    let path = if dir.is_empty() {
        filename
    } else {
        format!("{}/{}", dir, filename)
    };
    PreviewFile { path, content }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"{
        "components": {
            "btn": {
                "displayName": "Greeting Button",
                "type": "button",
                "properties": { "label": { "type": "static", "value": "Click me" } }
            },
            "bad": { "displayName": "Bad", "type": "Not A Tag" }
        },
        "flows": {
            "f1": {
                "name": "Say Hi",
                "trigger": { "componentId": "btn", "type": "onClick" },
                "nodes": [{ "id": "a", "type": "alert", "data": { "message": "Hi!" } }]
            }
        }
    }"#;

    fn manifest() -> Manifest {
        Manifest::from_json_str(MANIFEST).unwrap()
    }

    fn options(output_dir: &Path) -> BakeOptions<'_> {
        BakeOptions {
            output_dir,
            components: &[],
            dry_run: false,
            keep_existing: false,
            prettier: false,
        }
    }

    #[test]
    fn test_bake_writes_components_and_handlers() {
        let temp = TempDir::new().unwrap();
        let generator = Generator::new(GenerationOptions::default());
        let report = bake(&manifest(), &generator, options(temp.path())).unwrap();

        assert!(!report.is_success());
        let BakeOutcome::Written(written) = &report.outcome else {
            panic!("expected files to be written");
        };
        assert_eq!(
            written.written,
            vec![
                "src/components/GreetingButton.jsx",
                "src/components/handlers.jsx"
            ]
        );

        let component =
            fs::read_to_string(temp.path().join("src/components/GreetingButton.jsx")).unwrap();
        assert!(component.contains("<button onClick={onClick}>{label}</button>"));

        let handlers = fs::read_to_string(temp.path().join("src/components/handlers.jsx")).unwrap();
        assert_eq!(
            handlers,
            "/**\n * @generated stencil\n * Event handlers compiled from the manifest flows.\n */\n\
             \nconst handleSayHi = () => {\n  alert('Hi!');\n};\n\nexport { handleSayHi };\n"
        );
    }

    #[test]
    fn test_handler_module_has_unique_declarations() {
        let manifest = Manifest::from_json_str(
            r#"{
                "components": { "btn": { "displayName": "Opener", "type": "button" } },
                "flows": {
                    "f1": {
                        "name": "Open",
                        "trigger": { "componentId": "btn", "type": "click" },
                        "nodes": [{ "id": "a", "type": "alert", "data": { "message": "one" } }]
                    },
                    "f2": {
                        "name": "Open!",
                        "trigger": { "componentId": "btn", "type": "click" },
                        "nodes": [{ "id": "a", "type": "alert", "data": { "message": "two" } }]
                    }
                }
            }"#,
        )
        .unwrap();
        let generator = Generator::new(GenerationOptions::default());
        let flows = generator.compile_flows(&manifest);
        let file = handlers_file(&flows, generator.options(), false);

        assert_eq!(file.content.matches("const handleOpen =").count(), 1);
        assert_eq!(file.content.matches("const handleOpen2 =").count(), 1);
        assert!(file.content.ends_with("export { handleOpen, handleOpen2 };\n"));
    }

    #[test]
    fn test_keep_existing_skips_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src/components/GreetingButton.jsx");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "hand edited").unwrap();

        let generator = Generator::new(GenerationOptions::default());
        let report = bake(
            &manifest(),
            &generator,
            BakeOptions {
                keep_existing: true,
                ..options(temp.path())
            },
        )
        .unwrap();

        let BakeOutcome::Written(written) = &report.outcome else {
            panic!("expected files to be written");
        };
        assert_eq!(written.kept, vec!["src/components/GreetingButton.jsx"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let selected = vec!["btn".to_string()];
        let generator = Generator::new(GenerationOptions::default());
        let report = bake(
            &manifest(),
            &generator,
            BakeOptions {
                components: &selected,
                dry_run: true,
                ..options(temp.path())
            },
        )
        .unwrap();

        assert!(report.is_success());
        let BakeOutcome::Preview(files) = &report.outcome else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 2);
        assert!(!temp.path().join("src").exists());
    }
}
