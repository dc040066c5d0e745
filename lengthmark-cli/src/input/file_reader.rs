//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads prose documents as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Total size of a set of files, skipping any that cannot be inspected
    pub fn total_size(paths: &[impl AsRef<Path>]) -> u64 {
        paths
            .iter()
            .filter_map(|path| Self::file_size(path.as_ref()).ok())
            .sum()
    }
}
