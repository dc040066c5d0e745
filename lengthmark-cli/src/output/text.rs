//! Plain text output formatter

use super::{OutputFormatter, SentenceRecord, SummaryRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one `[category] sentence` per line
pub struct TextFormatter<W: Write> {
    writer: W,
    file_headers: bool,
    files_started: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    ///
    /// With `file_headers`, each file's sentences are preceded by its path.
    pub fn new(writer: W, file_headers: bool) -> Self {
        Self {
            writer,
            file_headers,
            files_started: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_file(&mut self, path: &str) -> Result<()> {
        if self.file_headers {
            if self.files_started > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {path} <==")?;
        }
        self.files_started += 1;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceRecord) -> Result<()> {
        writeln!(
            self.writer,
            "[{}] {}",
            sentence.category,
            sentence.display_text()
        )?;
        Ok(())
    }

    fn finish(&mut self, _summary: &SummaryRecord) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
