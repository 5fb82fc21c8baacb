use serde::Deserialize;

use crate::Value;

/// A declarative event-to-actions graph bound to one UI trigger.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flow {
    /// Unique flow id. May be omitted when the flow is keyed by id.
    #[serde(default)]
    pub id: String,

    /// Display name, used to derive the handler name
    #[serde(default)]
    pub name: String,

    /// The UI event that starts this flow
    pub trigger: Trigger,

    /// All nodes, including the trigger node, in declaration order
    #[serde(default)]
    pub nodes: Vec<FlowNode>,

    /// Execution dependencies between nodes
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Flow {
    /// Returns true if this flow is started by a click on the given component.
    pub fn is_click_on(&self, component_id: &str) -> bool {
        self.trigger.component_id == component_id && self.trigger.is_click()
    }
}

/// Binds a flow to one event on one component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trigger {
    #[serde(rename = "componentId")]
    pub component_id: String,

    /// Event type, e.g. "click" or "onClick"
    #[serde(rename = "type")]
    pub event: String,
}

impl Trigger {
    /// Returns true if the event type denotes a click.
    pub fn is_click(&self) -> bool {
        self.event.eq_ignore_ascii_case("click") || self.event.eq_ignore_ascii_case("onclick")
    }
}

/// A directed execution dependency: `source` runs before `target`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A node of a flow graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawFlowNode")]
pub struct FlowNode {
    pub id: String,
    pub kind: FlowNodeKind,
}

impl FlowNode {
    pub fn new(id: impl Into<String>, kind: FlowNodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Returns true for the node representing the triggering event.
    pub fn is_trigger(&self) -> bool {
        matches!(self.kind, FlowNodeKind::Trigger)
    }
}

/// What a flow node does.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowNodeKind {
    /// The event that starts the flow
    Trigger,
    /// Assign a value to a state variable
    SetState { variable: String, value: Value },
    /// Show a browser alert
    Alert { message: Value },
    /// Write to the console
    Console { level: ConsoleLevel, message: Value },
    /// A node type this generator does not know, kept by name
    Unknown { node_type: String },
}

/// Console method used by a console node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleLevel {
    #[default]
    Log,
    Info,
    Warn,
    Error,
    Debug,
}

impl ConsoleLevel {
    /// The `console` method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleLevel::Log => "log",
            ConsoleLevel::Info => "info",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
            ConsoleLevel::Debug => "debug",
        }
    }
}

/// Wire shape of a node: `{ id, type, data: { ... } }`.
#[derive(Deserialize)]
struct RawFlowNode {
    id: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    data: RawNodeData,
}

#[derive(Default, Deserialize)]
struct RawNodeData {
    variable: Option<String>,
    value: Option<Value>,
    message: Option<Value>,
    level: Option<ConsoleLevel>,
}

impl TryFrom<RawFlowNode> for FlowNode {
    type Error = String;

    fn try_from(raw: RawFlowNode) -> Result<Self, Self::Error> {
        let RawFlowNode {
            id,
            node_type,
            data,
        } = raw;

        let kind = match node_type.as_str() {
            "trigger" => FlowNodeKind::Trigger,
            "setState" => FlowNodeKind::SetState {
                variable: data
                    .variable
                    .ok_or_else(|| format!("setState node '{}' is missing `variable`", id))?,
                value: data.value.unwrap_or(Value::Null),
            },
            "alert" => FlowNodeKind::Alert {
                message: data.message.unwrap_or_else(|| Value::from("")),
            },
            "console" => FlowNodeKind::Console {
                level: data.level.unwrap_or_default(),
                message: data.message.unwrap_or_else(|| Value::from("")),
            },
            _ => FlowNodeKind::Unknown { node_type },
        };

        Ok(FlowNode { id, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flow() {
        let flow: Flow = serde_json::from_str(
            r#"{
                "id": "f1",
                "name": "Say Hi",
                "trigger": { "componentId": "btn", "type": "onClick" },
                "nodes": [
                    { "id": "t", "type": "trigger" },
                    { "id": "a", "type": "alert", "data": { "message": "Hi!" } },
                    { "id": "s", "type": "setState", "data": { "variable": "count", "value": 1 } },
                    { "id": "c", "type": "console", "data": { "level": "warn", "message": "x" } },
                    { "id": "h", "type": "httpRequest", "data": { "url": "/api" } }
                ],
                "edges": [{ "source": "t", "target": "a" }]
            }"#,
        )
        .unwrap();

        assert!(flow.is_click_on("btn"));
        assert!(flow.nodes[0].is_trigger());
        assert_eq!(
            flow.nodes[1].kind,
            FlowNodeKind::Alert {
                message: Value::from("Hi!")
            }
        );
        assert_eq!(
            flow.nodes[2].kind,
            FlowNodeKind::SetState {
                variable: "count".to_string(),
                value: Value::Number(1.0)
            }
        );
        assert_eq!(
            flow.nodes[3].kind,
            FlowNodeKind::Console {
                level: ConsoleLevel::Warn,
                message: Value::from("x")
            }
        );
        assert_eq!(
            flow.nodes[4].kind,
            FlowNodeKind::Unknown {
                node_type: "httpRequest".to_string()
            }
        );
    }

    #[test]
    fn test_set_state_requires_variable() {
        let result: Result<FlowNode, _> =
            serde_json::from_str(r#"{ "id": "s", "type": "setState", "data": { "value": 1 } }"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("missing `variable`"), "{err}");
    }

    #[test]
    fn test_trigger_click_detection() {
        let click = |event: &str| Trigger {
            component_id: "c".to_string(),
            event: event.to_string(),
        };
        assert!(click("click").is_click());
        assert!(click("onClick").is_click());
        assert!(click("CLICK").is_click());
        assert!(!click("change").is_click());
    }
}
