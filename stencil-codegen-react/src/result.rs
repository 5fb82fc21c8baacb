//! Result types returned to callers.

use serde::Serialize;
use stencil_codegen::pipeline::{Diagnostic, Phase};

/// A compiled flow handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedHandler {
    pub name: String,
    pub code: String,
    /// State setters the handler calls, in first-use order
    pub state_setters: Vec<String>,
    pub flow_id: String,
    pub component_id: String,
}

/// Outcome of compiling every flow in a manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowGenerationResult {
    pub handlers: Vec<GeneratedHandler>,
    /// Union of all handlers' setters, in first-use order
    pub state_setters: Vec<String>,
    pub warnings: Vec<String>,
    /// True if at least one handler was produced
    pub success: bool,
}

/// Where a failed generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorDetails {
    pub phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    /// RFC 3339 UTC timestamp with millisecond precision
    pub generated_at: String,
    pub level: u32,
    pub duration_ms: u64,
}

/// Outcome of generating one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    pub component_id: String,
    pub component_name: String,
    pub code: String,
    pub filename: String,
    pub filepath: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ErrorDetails>,
    pub metadata: GenerationMetadata,
    pub diagnostics: Vec<Diagnostic>,
    /// Handlers compiled for flows bound to this component
    pub handlers: Vec<GeneratedHandler>,
}

impl GenerationResult {
    /// The phase a failed generation stopped in.
    pub fn failed_phase(&self) -> Option<Phase> {
        self.error_details.map(|d| d.phase)
    }
}

/// A failed item of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub component_id: String,
    pub error: String,
    pub phase: Phase,
}

/// Outcome of generating several components.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGenerationResult {
    /// False if any component failed
    pub success: bool,
    pub results: Vec<GenerationResult>,
    pub success_count: usize,
    pub failure_count: usize,
    pub total_duration_ms: u64,
    pub failures: Vec<BatchFailure>,
}

impl BatchGenerationResult {
    /// Tally per-item results into a batch outcome.
    pub fn from_results(results: Vec<GenerationResult>, total_duration_ms: u64) -> Self {
        let failures: Vec<BatchFailure> = results
            .iter()
            .filter(|r| !r.success)
            .map(|r| BatchFailure {
                component_id: r.component_id.clone(),
                error: r.error.clone().unwrap_or_default(),
                phase: r.failed_phase().unwrap_or(Phase::Validation),
            })
            .collect();

        Self {
            success: failures.is_empty(),
            success_count: results.len() - failures.len(),
            failure_count: failures.len(),
            results,
            total_duration_ms,
            failures,
        }
    }
}
