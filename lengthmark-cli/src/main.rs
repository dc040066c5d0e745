//! lengthmark command-line entry point

use clap::Parser;
use lengthmark_cli::commands::Commands;

/// Classify prose sentences by length
#[derive(Debug, Parser)]
#[command(name = "lengthmark", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
