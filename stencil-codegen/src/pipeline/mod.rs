//! Generation pipeline primitives.
//!
//! Generators run a fixed sequence of [`Phase`]s over one component and
//! report what they noticed along the way through [`Diagnostics`].

mod diagnostic;
mod phase;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use phase::Phase;
