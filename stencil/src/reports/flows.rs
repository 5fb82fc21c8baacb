//! Flows command report data structures.

use stencil_codegen_react::FlowGenerationResult;

use super::{
    output::{Output, Report},
    plural,
};

#[derive(Debug)]
pub struct FlowsReport {
    pub result: FlowGenerationResult,
}

impl Report for FlowsReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.result.warnings {
            out.warning(warning);
        }

        for handler in &self.result.handlers {
            out.divider(&format!(
                "{} ({} on {})",
                handler.name, handler.flow_id, handler.component_id
            ));
            out.preformatted(&handler.code);
        }

        out.divider("Summary");
        out.preformatted(&plural(self.result.handlers.len(), "handler"));
        if !self.result.state_setters.is_empty() {
            out.key_value("State setters", &self.result.state_setters.join(", "));
        }
    }
}
