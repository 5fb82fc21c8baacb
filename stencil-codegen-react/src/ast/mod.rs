//! JavaScript and JSX AST builders.
//!
//! Small structural builders rendered through [`stencil_codegen::CodeBuilder`].

mod element;
mod fns;
mod imports;

pub use element::{AttrValue, INLINE_BODY_LIMIT, JsxAttribute, JsxBody, JsxElement};
pub use fns::{ArrowFn, ComponentFn};
pub use imports::Import;
