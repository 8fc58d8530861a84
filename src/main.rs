use anyhow::Result;
use clap::Parser;
use vigilo::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
