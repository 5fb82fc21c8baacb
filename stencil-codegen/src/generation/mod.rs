//! Code generation outputs.
//!
//! This module provides utilities for managing generated output:
//! - [`ImportCollector`] - Import tracking and deduplication

mod imports;

pub use imports::ImportCollector;
