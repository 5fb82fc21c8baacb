mod bake;
mod check;
mod completions;
mod flows;

use std::path::PathBuf;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use flows::FlowsCommand;
use stencil_manifest::Manifest;

use crate::config::{CONFIG_FILE, StencilConfig};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for stencil_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Manifest and configuration locations shared by the commands.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to the editor manifest (.json or .toml)
    #[arg(short, long, default_value = "manifest.json")]
    pub manifest: PathBuf,

    /// Path to stencil.toml
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

impl ProjectArgs {
    pub fn load(&self) -> Result<(Manifest, StencilConfig)> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let config = StencilConfig::load(&self.config)?;
        Ok((manifest, config))
    }
}

#[derive(Parser)]
#[command(name = "stencil")]
#[command(version)]
#[command(about = "Generate React components from editor manifests")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.init_logging();

        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Flows(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    fn init_logging(&self) {
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .format_timestamp(None)
            .init();
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate component files from the manifest
    Bake(BakeCommand),

    /// Generate in memory and report diagnostics
    Check(CheckCommand),

    /// Print the handlers compiled from the manifest flows
    Flows(FlowsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
