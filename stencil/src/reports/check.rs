//! Check command report data structures.

use std::path::PathBuf;

use stencil_codegen::pipeline::Diagnostic;
use stencil_codegen_react::BatchFailure;

use super::{
    output::{Output, Report},
    plural, render_diagnostic,
};

/// Report data from a dry generation run.
#[derive(Debug)]
pub struct CheckReport {
    pub manifest_path: PathBuf,
    pub component_count: usize,
    pub handler_count: usize,
    /// Diagnostics of every component, in manifest order.
    pub diagnostics: Vec<Diagnostic>,
    /// Flow compilation warnings.
    pub flow_warnings: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

impl CheckReport {
    /// Whether every component generated.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
            + self.flow_warnings.len()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(&format!(
                "[{}] `{}`: {}",
                failure.phase, failure.component_id, failure.error
            ));
        }

        for diag in &self.diagnostics {
            render_diagnostic(out, diag);
        }

        for warning in &self.flow_warnings {
            out.warning(warning);
        }

        if !self.diagnostics.is_empty() || !self.flow_warnings.is_empty() || !self.is_valid() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.manifest_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} of {} failed",
                self.failures.len(),
                plural(self.component_count, "component")
            ));
        }
        out.preformatted(&format!(
            "  {}, {}, {}",
            plural(self.component_count, "component"),
            plural(self.handler_count, "handler"),
            plural(self.warning_count(), "warning")
        ));
    }
}

#[cfg(test)]
mod tests {
    use stencil_codegen::pipeline::Phase;

    use super::*;
    use crate::reports::BufferOutput;

    fn report(failures: Vec<BatchFailure>) -> CheckReport {
        CheckReport {
            manifest_path: PathBuf::from("app.json"),
            component_count: 2,
            handler_count: 1,
            diagnostics: vec![
                Diagnostic::warning(Phase::Import, "child `x` not found").at("components.page.children"),
            ],
            flow_warnings: Vec::new(),
            failures,
        }
    }

    #[test]
    fn test_valid_report() {
        let mut out = BufferOutput::default();
        report(Vec::new()).render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: [import] child `x` not found\n  --> components.page.children",
                "",
                "✓ app.json is valid",
                "  2 components, 1 handler, 1 warning",
            ]
        );
    }

    #[test]
    fn test_failed_report() {
        let report = report(vec![BatchFailure {
            component_id: "bad".to_string(),
            error: "`Not A Tag` is not a valid element tag".to_string(),
            phase: Phase::Jsx,
        }]);
        assert!(!report.is_valid());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines[0],
            "error: [jsx] `bad`: `Not A Tag` is not a valid element tag"
        );
        assert!(out.lines.contains(&"✗ 1 of 2 components failed".to_string()));
    }
}
