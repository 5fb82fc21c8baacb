//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod bake;
mod check;
mod flows;
mod output;

pub use bake::{BakeOutcome, BakeReport, PreviewFile, WrittenResult};
pub use check::CheckReport;
pub use flows::FlowsReport;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Output, Report, TerminalOutput};
use stencil_codegen::pipeline::{Diagnostic, Severity};

/// Render a pipeline diagnostic with its location on a second line.
fn render_diagnostic(out: &mut dyn Output, diag: &Diagnostic) {
    let msg = match &diag.location {
        Some(loc) => format!("[{}] {}\n  --> {}", diag.phase, diag.message, loc),
        None => format!("[{}] {}", diag.phase, diag.message),
    };
    match diag.severity {
        Severity::Warning => out.warning(&msg),
        Severity::Info => out.info(&msg),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
