//! Core operations.
//!
//! The work behind each command, separated from argument parsing and
//! report rendering.

pub mod bake;
pub mod check;
pub mod flows;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use flows::flows;
use stencil_codegen_react::{GenerationOptions, Generator, PrettierFormatter};

/// Build the generator for a run.
pub fn generator(options: GenerationOptions, prettier: bool) -> Generator {
    let generator = Generator::new(options);
    if prettier {
        generator.with_formatter(PrettierFormatter::npx())
    } else {
        generator
    }
}
