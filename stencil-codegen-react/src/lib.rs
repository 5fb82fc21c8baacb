//! React JSX code generator for the Stencil component generator.
//!
//! Turns the components of a [`stencil_manifest::Manifest`] into React
//! function components, and its click flows into event handlers.
//!
//! # Usage
//!
//! ```
//! use stencil_codegen_react::{GenerationOptions, Generator};
//! use stencil_manifest::Manifest;
//!
//! let manifest = Manifest::from_json_str(r#"{
//!     "components": {
//!         "btn": {
//!             "displayName": "Submit Button",
//!             "type": "button",
//!             "properties": { "label": { "type": "static", "value": "Send" } }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let generator = Generator::new(GenerationOptions::default());
//! let batch = generator.generate_all(&manifest);
//!
//! assert!(batch.success);
//! assert!(batch.results[0].code.contains("<button>{label}</button>"));
//! ```
//!
//! # Generated Output
//!
//! Each component becomes `<componentPath>/<Name><ext>` holding the import
//! block, a provenance header and `export function Name(props)`. Handlers
//! for click flows are returned alongside and can be written to a shared
//! module.

mod assembler;
mod context;
mod error;
mod flow;
mod formatter;
mod generator;
mod header;
mod imports;
mod jsx;
mod literal;
mod naming;
mod options;
mod props;
mod result;

pub mod ast;

pub use assembler::{AssembledFile, AssemblyParts, CodeAssembler};
pub use context::{CLICK_TOKEN, ChildRef, EventBinding, GenerationContext};
pub use error::{AssemblyError, CodegenError, FlowError, ImportError, JsxError, PropsError};
pub use flow::{EMPTY_HANDLER_BODY, FlowCompilation, FlowCompiler, topological_order};
pub use formatter::{FormatError, Formatter, Passthrough, PrettierFormatter};
pub use generator::{Builders, Generator};
pub use header::{CommentHeaderBuilder, GENERATED_MARKER, HEADER_LEVEL, format_timestamp};
pub use imports::{ImportBlock, ImportBuilder};
pub use jsx::JsxBuilder;
pub use literal::{js_literal, number_literal, string_literal};
pub use naming::{JS_NAMING, handler_name, prop_identifier, setter_name};
pub use options::{
    FileExtension, FormatterConfig, FormatterOverrides, GenerationOptions, TrailingComma,
};
pub use props::{PropsBuilder, PropsSignature};
pub use result::{
    BatchFailure, BatchGenerationResult, ErrorDetails, FlowGenerationResult, GeneratedHandler,
    GenerationMetadata, GenerationResult,
};
