//! Configuration API for sentence length analysis

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{Error, Palette, Result};

/// Default configuration constants
pub mod defaults {
    /// Highest word count classified as `xs`
    pub const XS_THRESHOLD: i64 = 2;

    /// Highest word count classified as `sm`
    pub const SM_THRESHOLD: i64 = 5;

    /// Highest word count classified as `md`
    pub const MD_THRESHOLD: i64 = 10;

    /// Highest word count classified as `lg`
    pub const LG_THRESHOLD: i64 = 20;
}

/// Upper word-count bounds of the first four categories
///
/// Anything above `lg` is `xl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub xs: i64,
    pub sm: i64,
    pub md: i64,
    pub lg: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            xs: defaults::XS_THRESHOLD,
            sm: defaults::SM_THRESHOLD,
            md: defaults::MD_THRESHOLD,
            lg: defaults::LG_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Create thresholds from the four upper bounds
    pub fn new(xs: i64, sm: i64, md: i64, lg: i64) -> Self {
        Self { xs, sm, md, lg }
    }

    /// Check that the thresholds are non-negative and strictly ascending
    pub fn validate(&self) -> Result<()> {
        if self.xs < 0 {
            return Err(Error::Configuration(format!(
                "xs threshold must not be negative (got {})",
                self.xs
            )));
        }

        let ordered = [("xs", self.xs), ("sm", self.sm), ("md", self.md), ("lg", self.lg)];
        for pair in ordered.windows(2) {
            let (lower_name, lower) = pair[0];
            let (upper_name, upper) = pair[1];
            if upper <= lower {
                return Err(Error::Configuration(format!(
                    "{upper_name} threshold ({upper}) must be greater than {lower_name} threshold ({lower})"
                )));
            }
        }

        Ok(())
    }
}

/// Analysis configuration
///
/// A pass reads one snapshot of this record; it can be swapped between
/// passes. Every field has a default, so a partial TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// When false, analysis returns nothing without scanning
    pub enabled: bool,
    /// Whether a bare line break ends a sentence
    pub treat_line_break_as_sentence_end: bool,
    /// Characters ending a sentence in addition to `. ! ? : 。 … ·`
    pub extra_sentence_enders: String,
    /// Word-count bounds per category
    pub thresholds: Thresholds,
    /// Category colors, for presentation only
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            treat_line_break_as_sentence_end: false,
            extra_sentence_enders: String::new(),
            thresholds: Thresholds::default(),
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a configuration from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&source)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    ///
    /// The engine tolerates invalid values; validation belongs to whoever
    /// loads configuration.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;

        if let Some(ch) = self
            .extra_sentence_enders
            .chars()
            .find(|ch| ch.is_whitespace())
        {
            return Err(Error::Configuration(format!(
                "extra_sentence_enders must not contain whitespace (found {ch:?}); \
                 use treat_line_break_as_sentence_end for line breaks"
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    enabled: Option<bool>,
    thresholds: Option<Thresholds>,
    line_break_as_sentence_end: Option<bool>,
    extra_sentence_enders: Option<String>,
    palette: Option<Palette>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable analysis
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set the category thresholds
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Make bare line breaks end sentences
    pub fn line_break_as_sentence_end(mut self, value: bool) -> Self {
        self.line_break_as_sentence_end = Some(value);
        self
    }

    /// Add sentence-ending characters on top of the defaults
    pub fn extra_sentence_enders(mut self, enders: impl Into<String>) -> Self {
        self.extra_sentence_enders = Some(enders.into());
        self
    }

    /// Set the category colors
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }

        if let Some(thresholds) = self.thresholds {
            config.thresholds = thresholds;
        }

        if let Some(value) = self.line_break_as_sentence_end {
            config.treat_line_break_as_sentence_end = value;
        }

        if let Some(enders) = self.extra_sentence_enders {
            config.extra_sentence_enders = enders;
        }

        if let Some(palette) = self.palette {
            config.palette = palette;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.enabled);
        assert!(!config.treat_line_break_as_sentence_end);
        assert_eq!(config.thresholds, Thresholds::new(2, 5, 10, 20));
        assert!(config.extra_sentence_enders.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Thresholds::new(1, 2, 3, 4).validate().is_ok());
        assert!(Thresholds::new(0, 1, 2, 3).validate().is_ok());

        let err = Thresholds::new(2, 2, 10, 20).validate().unwrap_err();
        assert!(err.to_string().contains("sm threshold (2)"));

        assert!(Thresholds::new(5, 4, 10, 20).validate().is_err());
        assert!(Thresholds::new(2, 5, 10, 9).validate().is_err());
        assert!(Thresholds::new(-1, 5, 10, 20).validate().is_err());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .enabled(false)
            .thresholds(Thresholds::new(3, 6, 12, 24))
            .line_break_as_sentence_end(true)
            .extra_sentence_enders(";")
            .build()
            .unwrap();

        assert!(!config.enabled);
        assert_eq!(config.thresholds.md, 12);
        assert!(config.treat_line_break_as_sentence_end);
        assert_eq!(config.extra_sentence_enders, ";");
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(Config::builder()
            .thresholds(Thresholds::new(10, 5, 2, 1))
            .build()
            .is_err());

        assert!(Config::builder()
            .extra_sentence_enders(";\n")
            .build()
            .is_err());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str(
            r#"
treat_line_break_as_sentence_end = true

[thresholds]
xs = 3
"#,
        )
        .unwrap();

        assert!(config.treat_line_break_as_sentence_end);
        assert_eq!(config.thresholds, Thresholds::new(3, 5, 10, 20));
        assert!(config.enabled);
    }

    #[test]
    fn test_toml_shape_errors() {
        assert!(matches!(
            Config::from_toml_str("unknown_field = 1"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[thresholds]\nxs = \"two\""),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[thresholds]\nxs = 50"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let rendered = Config::default().to_toml_string().unwrap();
        assert!(rendered.contains("[thresholds]"));
        assert!(rendered.contains("[palette]"));
        assert_eq!(Config::from_toml_str(&rendered).unwrap(), Config::default());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lengthmark.toml");
        fs::write(&path, "enabled = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.enabled);

        let missing = Config::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(Error::Io { .. })));
    }
}
