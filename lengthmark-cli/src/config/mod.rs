//! Configuration loading for the CLI

use std::path::Path;

use lengthmark_core::Config;

use crate::error::{CliError, CliResult};

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "lengthmark.toml";

/// Load the analysis configuration
///
/// An explicit path must exist and be valid. Without one, `lengthmark.toml`
/// in the working directory is used when present, and the built-in defaults
/// otherwise.
pub fn load_config(explicit: Option<&Path>) -> CliResult<Config> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            path
        }
        None => {
            let local = Path::new(DEFAULT_CONFIG_FILE);
            if !local.is_file() {
                log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                return Ok(Config::default());
            }
            local
        }
    };

    log::info!("Loading configuration from {}", path.display());
    Config::from_file(path).map_err(|e| CliError::ConfigError(e.to_string()).into())
}
