//! Manifest model and ingestion for the Stencil component generator.
//!
//! A manifest describes a project's component tree and its event-logic
//! flows. It is parsed from JSON or TOML and validated once at this
//! boundary, so code generators downstream only ever see well-typed input.
//!
//! ```
//! use stencil_manifest::Manifest;
//!
//! let manifest = Manifest::from_json_str(r#"{
//!     "components": {
//!         "btn": { "id": "btn", "displayName": "Submit", "type": "button" }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(manifest.component("btn").unwrap().display_name, "Submit");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod component;
mod error;
mod flow;
mod manifest;
mod value;

pub use component::{Component, PropertyDef, Styling};
pub use error::{Error, Result};
pub use flow::{ConsoleLevel, Edge, Flow, FlowNode, FlowNodeKind, Trigger};
pub use manifest::{Manifest, ManifestFormat};
pub use value::Value;
