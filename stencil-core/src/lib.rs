//! Core utilities and types for the Stencil component generator.
//!
//! This crate provides the identifier sanitizers and file helpers shared
//! across the Stencil crates.

mod file;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{
    FALLBACK_COMPONENT_NAME, FALLBACK_IDENTIFIER, capitalize, is_identifier,
    sanitize_component_name, sanitize_identifier, title_case, to_camel_case,
};
