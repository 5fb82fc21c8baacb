use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct FlowsCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl FlowsCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, config) = self.project.load()?;
        let generator = ops::generator(config.generation, false);

        ops::flows(&manifest, &generator).render(&mut TerminalOutput::new());
        Ok(())
    }
}
