//! swichr command-line entry point

use clap::Parser;
use swichr_cli::commands::Commands;

/// Case-preserving, punctuation-tolerant word replacement
#[derive(Debug, Parser)]
#[command(name = "swichr", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
