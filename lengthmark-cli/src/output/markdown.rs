//! Markdown output formatter

use super::{OutputFormatter, SentenceRecord, SummaryRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - a numbered list per file and a summary table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_file(&mut self, path: &str) -> Result<()> {
        writeln!(self.writer, "## {path}")?;
        writeln!(self.writer)?;
        self.sentence_count = 0;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceRecord) -> Result<()> {
        self.sentence_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` {}",
            self.sentence_count,
            sentence.category,
            sentence.display_text()
        )?;
        Ok(())
    }

    fn finish(&mut self, summary: &SummaryRecord) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Sentences |")?;
        writeln!(self.writer, "|----------|-----------|")?;
        for (category, count) in &summary.categories {
            writeln!(self.writer, "| {category} | {count} |")?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*Total sentences: {} ({:.1} words on average)*",
            summary.sentences, summary.average_words
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
