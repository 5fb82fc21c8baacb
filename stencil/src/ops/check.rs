//! Check operation - generate in memory and collect diagnostics.

use std::path::Path;

use stencil_codegen_react::Generator;
use stencil_manifest::Manifest;

use crate::reports::CheckReport;

pub fn check(manifest: &Manifest, manifest_path: &Path, generator: &Generator) -> CheckReport {
    let batch = generator.generate_all(manifest);
    let flows = generator.compile_flows(manifest);

    CheckReport {
        manifest_path: manifest_path.to_path_buf(),
        component_count: batch.results.len(),
        handler_count: flows.handlers.len(),
        diagnostics: batch
            .results
            .into_iter()
            .flat_map(|result| result.diagnostics)
            .collect(),
        flow_warnings: flows.warnings,
        failures: batch.failures,
    }
}

#[cfg(test)]
mod tests {
    use stencil_codegen::pipeline::Phase;
    use stencil_codegen_react::GenerationOptions;

    use super::*;

    #[test]
    fn test_check_reports_failures_and_warnings() {
        let manifest = Manifest::from_json_str(
            r#"{
                "components": {
                    "page": { "displayName": "Page", "type": "div", "children": ["gone"] },
                    "bad": { "displayName": "Bad", "type": "Not A Tag" }
                }
            }"#,
        )
        .unwrap();
        let generator = Generator::new(GenerationOptions::default());
        let report = check(&manifest, Path::new("app.json"), &generator);

        assert!(!report.is_valid());
        assert_eq!(report.component_count, 2);
        assert_eq!(report.handler_count, 0);
        assert_eq!(report.failures[0].component_id, "bad");
        assert_eq!(report.failures[0].phase, Phase::Jsx);
        assert!(
            report
                .diagnostics
                .iter()
                .any(|d| d.phase == Phase::Import && d.severity.is_warning())
        );
    }
}
