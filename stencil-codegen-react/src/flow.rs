//! Flow graph compilation into event handlers.
//!
//! A flow's action nodes are ordered with Kahn's algorithm over the edges
//! between them and emitted as the body of an arrow function. Malformed
//! graphs degrade instead of failing: a cycle falls back to declaration
//! order and unknown node types become comments.

use std::collections::{HashMap, VecDeque};

use indexmap::IndexSet;
use stencil_codegen::pipeline::{Diagnostic, Phase};
use stencil_core::is_identifier;
use stencil_manifest::{Edge, Flow, FlowNode, FlowNodeKind, Manifest};

use crate::{
    ast::ArrowFn,
    error::FlowError,
    literal::js_literal,
    naming::{handler_name, setter_name},
    result::{FlowGenerationResult, GeneratedHandler},
};

/// Body emitted for a flow without action nodes.
pub const EMPTY_HANDLER_BODY: &str = "// No actions defined";

/// A compiled handler and what was noticed while compiling it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowCompilation {
    pub handler: GeneratedHandler,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compiles flows into handler functions.
#[derive(Debug, Clone, Default)]
pub struct FlowCompiler;

impl FlowCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Compile one flow.
    pub fn compile(&self, flow: &Flow) -> Result<FlowCompilation, FlowError> {
        self.compile_as(flow, handler_name(&flow.name))
    }

    fn compile_as(&self, flow: &Flow, name: String) -> Result<FlowCompilation, FlowError> {
        let location = format!("flows.{}", flow.id);
        let mut diagnostics = Vec::new();

        let actions: Vec<&FlowNode> = flow.nodes.iter().filter(|n| !n.is_trigger()).collect();

        for edge in &flow.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !flow.nodes.iter().any(|n| n.id == *endpoint) {
                    diagnostics.push(
                        Diagnostic::warning(
                            Phase::Flow,
                            format!("edge references unknown node `{}`", endpoint),
                        )
                        .at(location.clone()),
                    );
                }
            }
        }

        let ordered = match topological_order(&actions, &flow.edges) {
            Some(ordered) => ordered,
            None => {
                diagnostics.push(
                    Diagnostic::warning(
                        Phase::Flow,
                        format!(
                            "flow `{}` contains a cycle; actions are emitted in declaration order",
                            flow.name
                        ),
                    )
                    .at(location.clone()),
                );
                actions
            }
        };

        let mut setters: IndexSet<String> = IndexSet::new();
        let mut statements = Vec::with_capacity(ordered.len());
        for node in ordered {
            if let Some(statement) = emit(node, &mut setters)? {
                statements.push(statement);
            }
        }

        let code = ArrowFn::new(&name)
            .statements(statements)
            .placeholder(EMPTY_HANDLER_BODY)
            .build()
            .trim_end()
            .to_string();

        log::debug!("compiled flow `{}` into `{}`", flow.id, name);

        Ok(FlowCompilation {
            handler: GeneratedHandler {
                name,
                code,
                state_setters: setters.into_iter().collect(),
                flow_id: flow.id.clone(),
                component_id: flow.trigger.component_id.clone(),
            },
            diagnostics,
        })
    }

    /// Compile every flow in the manifest.
    ///
    /// A failing flow is reported as a warning and does not stop its
    /// siblings. Handler names are unique across the result: a later flow
    /// whose name clashes gets a numeric suffix. The batch succeeds if at
    /// least one handler was produced.
    pub fn compile_all(&self, manifest: &Manifest) -> FlowGenerationResult {
        let mut result = FlowGenerationResult::default();
        let mut setters: IndexSet<String> = IndexSet::new();
        let mut names: HashMap<String, String> = HashMap::new();

        for flow in manifest.flows() {
            let base = handler_name(&flow.name);
            let mut name = base.clone();
            let mut suffix = 2;
            while names.contains_key(&name) {
                name = format!("{}{}", base, suffix);
                suffix += 1;
            }

            match self.compile_as(flow, name.clone()) {
                Ok(compilation) => {
                    result
                        .warnings
                        .extend(compilation.diagnostics.iter().map(ToString::to_string));

                    if let Some(previous) = names.get(&base).filter(|_| name != base) {
                        result.warnings.push(format!(
                            "flows `{}` and `{}` both compile to `{}`; `{}` is renamed to `{}`",
                            previous, flow.id, base, flow.id, name
                        ));
                    }
                    names.insert(name, flow.id.clone());

                    let handler = compilation.handler;
                    setters.extend(handler.state_setters.iter().cloned());
                    result.handlers.push(handler);
                }
                Err(err) => {
                    log::warn!("skipping flow `{}`: {}", flow.id, err);
                    result
                        .warnings
                        .push(format!("flow `{}` failed to compile: {}", flow.id, err));
                }
            }
        }

        result.state_setters = setters.into_iter().collect();
        result.success = !result.handlers.is_empty();
        result
    }
}

/// Order action nodes so every edge source precedes its target.
///
/// Only edges between two action nodes count. The queue is seeded in
/// declaration order and drained FIFO, so independent nodes keep their
/// relative order. Returns `None` when the nodes contain a cycle.
pub fn topological_order<'f>(actions: &[&'f FlowNode], edges: &[Edge]) -> Option<Vec<&'f FlowNode>> {
    let index: HashMap<&str, usize> = actions
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect();

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); actions.len()];
    let mut in_degree = vec![0usize; actions.len()];
    for edge in edges {
        if let (Some(&from), Some(&to)) = (
            index.get(edge.source.as_str()),
            index.get(edge.target.as_str()),
        ) {
            adjacency[from].push(to);
            in_degree[to] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..actions.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut sorted = Vec::with_capacity(actions.len());

    while let Some(current) = queue.pop_front() {
        sorted.push(actions[current]);
        for &next in &adjacency[current] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    (sorted.len() == actions.len()).then_some(sorted)
}

fn emit(node: &FlowNode, setters: &mut IndexSet<String>) -> Result<Option<String>, FlowError> {
    let statement = match &node.kind {
        FlowNodeKind::Trigger => return Ok(None),
        FlowNodeKind::SetState { variable, value } => {
            if !is_identifier(variable) {
                return Err(FlowError::InvalidStateVariable {
                    node_id: node.id.clone(),
                    variable: variable.clone(),
                });
            }
            let setter = setter_name(variable);
            let statement = format!("{}({});", setter, js_literal(value));
            setters.insert(setter);
            statement
        }
        FlowNodeKind::Alert { message } => format!("alert({});", js_literal(message)),
        FlowNodeKind::Console { level, message } => {
            format!("console.{}({});", level.as_str(), js_literal(message))
        }
        FlowNodeKind::Unknown { node_type } => format!("// Unsupported action: {}", node_type),
    };
    Ok(Some(statement))
}
