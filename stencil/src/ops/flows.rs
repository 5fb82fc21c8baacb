//! Flows operation - compile every flow into a handler.

use stencil_codegen_react::Generator;
use stencil_manifest::Manifest;

use crate::reports::FlowsReport;

pub fn flows(manifest: &Manifest, generator: &Generator) -> FlowsReport {
    FlowsReport {
        result: generator.compile_flows(manifest),
    }
}
