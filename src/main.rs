use anyhow::Result;
use clap::Parser;
use kcmdline::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
