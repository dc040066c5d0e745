//! Error types for the API

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration loading and validation
///
/// Analysis itself never fails; these errors only surface while a
/// configuration is being loaded, validated or written.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration values violate an invariant
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has the wrong shape
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
