//! Styles command implementation

use anyhow::Result;
use clap::Args;
use lengthmark_core::Category;
use std::path::PathBuf;

use crate::config::load_config;

/// Arguments for the styles command
#[derive(Debug, Args)]
pub struct StylesArgs {
    /// Configuration file (default: ./lengthmark.toml when present)
    #[arg(short, long, value_name = "FILE", env = "LENGTHMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a CSS `:root` block instead of a table
    #[arg(long)]
    pub css: bool,
}

impl StylesArgs {
    /// Execute the styles command
    pub fn execute(&self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        print!("{}", self.render(&config));
        Ok(())
    }

    fn render(&self, config: &lengthmark_core::Config) -> String {
        if self.css {
            return config.palette.to_css();
        }

        let mut out = String::new();
        for category in Category::ALL {
            out.push_str(&format!(
                "{:<3} {:<22} {}\n",
                category.as_str(),
                category.css_class(),
                config.palette.color(category)
            ));
        }
        out
    }
}
