use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::ProjectArgs;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Only generate these component ids (repeatable)
    #[arg(long = "component", value_name = "ID")]
    pub components: Vec<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the generation results as JSON
    #[arg(long)]
    pub json: bool,

    /// Format output with Prettier (via npx)
    #[arg(long)]
    pub prettier: bool,

    /// Do not overwrite files that already exist
    #[arg(long)]
    pub keep_existing: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, config) = self.project.load()?;
        let generator = ops::generator(config.generation, self.prettier);

        let report = ops::bake(
            &manifest,
            &generator,
            BakeOptions {
                output_dir: &self.output,
                components: &self.components,
                dry_run: self.dry_run,
                keep_existing: self.keep_existing,
                prettier: self.prettier,
            },
        )?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode results")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }
}
