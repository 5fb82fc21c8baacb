use indexmap::IndexMap;
use serde::Deserialize;

use crate::Value;

/// A UI component in the manifest tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unique component id. May be omitted when the component is keyed by id.
    #[serde(default)]
    pub id: String,

    /// Human-readable name, used to derive the generated function name
    #[serde(default)]
    pub display_name: String,

    /// Element type tag; some are virtual types remapped at generation time
    #[serde(rename = "type")]
    pub component_type: String,

    /// Properties keyed by name
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDef>,

    /// Class list and inline styles
    #[serde(default)]
    pub styling: Styling,

    /// Ordered child component ids
    #[serde(default)]
    pub children: Vec<String>,
}

impl Component {
    /// Create a component with no properties, styling or children.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        component_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            component_type: component_type.into(),
            properties: IndexMap::new(),
            styling: Styling::default(),
            children: Vec::new(),
        }
    }

    /// Add a property.
    pub fn with_property(mut self, name: impl Into<String>, def: PropertyDef) -> Self {
        self.properties.insert(name.into(), def);
        self
    }

    /// Add a child component id.
    pub fn with_child(mut self, id: impl Into<String>) -> Self {
        self.children.push(id.into());
        self
    }

    /// Replace the styling record.
    pub fn with_styling(mut self, styling: Styling) -> Self {
        self.styling = styling;
        self
    }

    /// Returns true if the component declares child components.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Look up a static property value by name.
    pub fn static_value(&self, name: &str) -> Option<&Value> {
        match self.properties.get(name)? {
            PropertyDef::Static { value } => Some(value),
            PropertyDef::Prop { .. } => None,
        }
    }
}

/// How a component property gets its value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PropertyDef {
    /// A fixed value baked into the component
    Static { value: Value },
    /// A value supplied by the parent, with an optional default
    Prop {
        #[serde(default)]
        default: Option<Value>,
    },
}

impl PropertyDef {
    /// Create a static property.
    pub fn fixed(value: impl Into<Value>) -> Self {
        PropertyDef::Static {
            value: value.into(),
        }
    }

    /// Create a parent-supplied property.
    pub fn prop(default: Option<Value>) -> Self {
        PropertyDef::Prop { default }
    }

    /// The value used as the destructuring default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            PropertyDef::Static { value } => Some(value),
            PropertyDef::Prop { default } => default.as_ref(),
        }
    }

    /// Returns true if the property resolves to a string.
    pub fn is_string(&self) -> bool {
        self.default_value().is_some_and(Value::is_string)
    }
}

/// Styling record of a component.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styling {
    /// Ordered class names
    #[serde(default)]
    pub base_classes: Vec<String>,

    /// CSS property -> value, in declaration order
    #[serde(default)]
    pub inline_styles: IndexMap<String, Value>,
}
