//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod analyze;
pub mod generate_config;
pub mod styles;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify the sentences of text files by length
    Analyze(analyze::AnalyzeArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// Write a commented default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Print the category colors
    Styles(styles::StylesArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Styles(args) => args.execute(),
        }
    }
}
