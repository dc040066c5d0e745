//! Output formatting module

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use lengthmark_core::{Category, ClassifiedSentence, Summary};
use serde::{Deserialize, Serialize};

/// Trait for output formatters
///
/// Files are reported in order: `begin_file`, then that file's sentences,
/// then the next file. `finish` is called once with the totals.
pub trait OutputFormatter: Send + Sync {
    /// Start the sentences of one input file
    fn begin_file(&mut self, path: &str) -> Result<()>;

    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &SentenceRecord) -> Result<()>;

    /// Write the totals and flush
    fn finish(&mut self, summary: &SummaryRecord) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `[category] sentence` per line
    Text,
    /// JSON document with every sentence record and the totals
    Json,
    /// Markdown list with category badges and a summary table
    Markdown,
}

/// One classified sentence, ready for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Input file the sentence came from
    pub file: String,
    /// The sentence text
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Character offset of the first character
    pub char_start: usize,
    /// Character offset one past the last character
    pub char_end: usize,
    /// Word count
    pub words: usize,
    /// Length category
    pub category: Category,
}

impl SentenceRecord {
    /// Build records for every sentence found in `text`
    pub fn from_analysis(file: &str, text: &str, sentences: &[ClassifiedSentence]) -> Vec<Self> {
        let bytes: Vec<usize> = sentences
            .iter()
            .flat_map(|s| [s.start(), s.end()])
            .collect();
        let chars = lengthmark_core::char_offsets(text, &bytes);

        sentences
            .iter()
            .zip(chars.chunks_exact(2))
            .map(|(sentence, chars)| Self {
                file: file.to_string(),
                text: sentence.text(text).to_string(),
                start: sentence.start(),
                end: sentence.end(),
                char_start: chars[0],
                char_end: chars[1],
                words: sentence.word_count,
                category: sentence.category,
            })
            .collect()
    }

    /// Sentence text with every whitespace run collapsed to one space
    pub fn display_text(&self) -> String {
        self.text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Totals over all analyzed files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Number of analyzed files
    pub files: usize,
    /// Number of classified sentences
    pub sentences: usize,
    /// Total words
    pub words: usize,
    /// Average words per sentence
    pub average_words: f32,
    /// Sentence count per category
    pub categories: BTreeMap<Category, usize>,
}

impl SummaryRecord {
    /// Build the record from the merged summary of `files` files
    pub fn new(files: usize, summary: &Summary) -> Self {
        Self {
            files,
            sentences: summary.sentences,
            words: summary.words,
            average_words: summary.average_words(),
            categories: Category::ALL
                .iter()
                .map(|&category| (category, summary.count(category)))
                .collect(),
        }
    }
}

/// Create the formatter for `format`, writing to `writer`
///
/// `multiple_files` makes the text formatter print a header per file.
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    multiple_files: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, multiple_files)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
