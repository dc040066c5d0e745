//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use lengthmark_core::Config;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

const HEADER: &str = "\
# lengthmark configuration
#
# enabled: set to false to turn analysis off entirely
# treat_line_break_as_sentence_end: end a sentence at every line break
# extra_sentence_enders: characters that end a sentence in addition to
#   . ! ? : 。 … ·
#
# A sentence with at most `xs` words is xs, at most `sm` words is sm,
# and so on. Anything longer than `lg` is xl. Thresholds must be
# non-negative and strictly ascending.
#
# [palette] holds the color published for each category.

";

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.display().to_string()).into());
        }

        let template = Self::generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds and palette to taste");
        println!("2. Validate your configuration:");
        println!("   lengthmark validate -c {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   lengthmark analyze -i 'notes/*.md' -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    fn generate_template() -> Result<String> {
        let body = Config::default().to_toml_string()?;
        Ok(format!("{HEADER}{body}"))
    }
}
