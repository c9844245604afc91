//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use swichr_engine::DEFAULT_PUNCTUATION;

pub mod generate_config;
pub mod replace;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace a word throughout a file, keeping each occurrence's casing
    Replace(replace::ReplaceArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the default punctuation characters
    Punctuation,

    /// List available execution modes
    Modes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Replace(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        println!("{}", self.render());
    }

    fn render(&self) -> String {
        match self {
            ListCommands::Punctuation => {
                let chars: String = DEFAULT_PUNCTUATION.iter().collect();
                format!("Default punctuation ({} characters):\n  {chars}", chars.chars().count())
            }
            ListCommands::Modes => "Execution modes:\n  \
                 sequential - one line at a time on the calling thread\n  \
                 parallel   - windows of lines on a worker pool, written in order\n  \
                 adaptive   - parallel for inputs of at least the threshold size (default)"
                .to_string(),
        }
    }
}
