mod export;
mod init;

pub use export::ExportCommand;
pub use init::InitCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Export backend models and serializers to TypeScript interfaces.
#[derive(Parser, Debug)]
#[command(name = "tsexport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate TypeScript interfaces from schema descriptors.
    Export(ExportCommand),

    /// Create a tsexport.toml configuration file.
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Export(cmd) => cmd.execute(),
            Commands::Init(cmd) => cmd.execute(),
        }
    }
}
