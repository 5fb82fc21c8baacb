//! Shared code generation utilities for the Stencil component generator.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by the language-specific generators (e.g., `stencil-codegen-react`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector)
//! - [`language`] - Language-specific abstractions (NamingConvention)
//! - [`pipeline`] - Phases and the diagnostics channel

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
