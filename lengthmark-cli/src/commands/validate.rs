//! Validate command implementation

use anyhow::Result;
use clap::Args;
use lengthmark_core::Config;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Config::from_file(&self.config) {
            Ok(config) => {
                let t = &config.thresholds;
                println!("✓ Configuration is valid!");
                println!("  Enabled: {}", config.enabled);
                println!(
                    "  Line breaks end sentences: {}",
                    config.treat_line_break_as_sentence_end
                );
                println!(
                    "  Thresholds: xs ≤ {}, sm ≤ {}, md ≤ {}, lg ≤ {}",
                    t.xs, t.sm, t.md, t.lg
                );
                if !config.extra_sentence_enders.is_empty() {
                    println!("  Extra sentence enders: {}", config.extra_sentence_enders);
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
