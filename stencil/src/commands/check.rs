use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, config) = self.project.load()?;
        let generator = ops::generator(config.generation, false);

        let report = ops::check(&manifest, &self.project.manifest, &generator);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
