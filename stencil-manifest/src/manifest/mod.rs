//! Manifest root type and parsing.

mod parse;
mod validate;

use indexmap::IndexMap;
pub use parse::ManifestFormat;
use serde::Deserialize;

use crate::{Component, Flow};

/// Root manifest: the component tree and the logic flows bound to it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Manifest {
    /// Components keyed by id, in declaration order
    #[serde(default)]
    pub components: IndexMap<String, Component>,

    /// Flows keyed by id, in declaration order
    #[serde(default)]
    pub flows: IndexMap<String, Flow>,
}

impl Manifest {
    /// Look up a component by id.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Iterate over all components in declaration order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Iterate over all flows in declaration order.
    pub fn flows(&self) -> impl Iterator<Item = &Flow> {
        self.flows.values()
    }

    /// The first flow triggered by a click on the given component.
    pub fn click_flow_for(&self, component_id: &str) -> Option<&Flow> {
        self.flows().find(|flow| flow.is_click_on(component_id))
    }

    /// Add a component, keyed by its id.
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.insert(component.id.clone(), component);
        self
    }

    /// Add a flow, keyed by its id.
    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flows.insert(flow.id.clone(), flow);
        self
    }
}
