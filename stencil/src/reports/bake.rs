//! Bake command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use stencil_codegen_react::{BatchGenerationResult, FlowGenerationResult};

use super::{
    output::{Output, Report},
    plural, render_diagnostic,
};

/// Report data from component generation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BakeReport {
    /// Per-component results.
    pub components: BatchGenerationResult,

    /// Handlers compiled from every flow.
    pub flows: FlowGenerationResult,

    /// What happened on disk.
    #[serde(skip)]
    pub outcome: BakeOutcome,
}

#[derive(Debug)]
pub enum BakeOutcome {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug, Default)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Paths written, relative to the output directory.
    pub written: Vec<String>,
    /// Paths left alone because they already existed.
    pub kept: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl BakeReport {
    /// Whether every requested component was generated.
    pub fn is_success(&self) -> bool {
        self.components.success
    }

    fn render_problems(&self, out: &mut dyn Output) {
        for result in &self.components.results {
            for diag in result.diagnostics.iter().filter(|d| d.severity.is_warning()) {
                render_diagnostic(out, diag);
            }
        }
        for warning in &self.flows.warnings {
            out.warning(warning);
        }
        for failure in &self.components.failures {
            out.error(&format!(
                "`{}` failed in {} phase: {}",
                failure.component_id, failure.phase, failure.error
            ));
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!(
            "Generated {}",
            plural(self.components.success_count, "component")
        ));
        for path in &written.written {
            out.added_item(path);
        }
        for path in &written.kept {
            out.kept_item(&format!("{} (kept)", path));
        }
        for failure in &self.components.failures {
            out.failed_item(&failure.component_id);
        }
        out.newline();
        out.key_value("Output", &written.output_dir.display().to_string());
        out.key_value(
            "Duration",
            &format!("{}ms", self.components.total_duration_ms),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} would be generated", plural(files.len(), "file")));
    }
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        self.render_problems(out);
        match &self.outcome {
            BakeOutcome::Written(written) => self.render_written(out, written),
            BakeOutcome::Preview(files) => self.render_preview(out, files),
        }
    }
}
