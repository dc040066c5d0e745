//! JSON output formatter

use super::{OutputFormatter, SentenceRecord, SummaryRecord};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects every record and writes one document at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceRecord>,
}

#[derive(Serialize)]
struct Document<'a> {
    sentences: &'a [SentenceRecord],
    summary: &'a SummaryRecord,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_file(&mut self, _path: &str) -> Result<()> {
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceRecord) -> Result<()> {
        self.sentences.push(sentence.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &SummaryRecord) -> Result<()> {
        let document = Document {
            sentences: &self.sentences,
            summary,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
