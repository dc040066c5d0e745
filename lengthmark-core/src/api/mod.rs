//! Public API for sentence length analysis
//!
//! This module wires the domain pieces (scanner, word counter, exclusion
//! index, classifier) into analysis passes and holds the configuration and
//! output types shared by hosts and the CLI.

mod analyzer;
mod config;
mod error;
mod output;
mod style;


pub use analyzer::{analyze, Analyzer};
pub use config::{defaults, Config, ConfigBuilder, Thresholds};
pub use error::{Error, Result};
pub use output::{char_offsets, ClassifiedSentence, Summary};
pub use style::{Palette, STYLE_VARIABLE_PREFIX};
