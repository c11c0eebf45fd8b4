use anyhow::Result;
use clap::Parser;
use tsexport::Cli;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.execute()
}
