//! Analyze command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use lengthmark_core::{Analyzer, Config, ExclusionIndex, Summary};
use rayon::prelude::*;

use crate::annotate::{Annotator, MarkdownAnnotator, PlainTextAnnotator};
use crate::config::load_config;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, SentenceRecord, SummaryRecord};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (default: ./lengthmark.toml when present)
    #[arg(short, long, value_name = "FILE", env = "LENGTHMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Treat every line break as the end of a sentence
    #[arg(long)]
    pub line_breaks: bool,

    /// Treat input as plain text; nothing is excluded
    #[arg(long)]
    pub plain: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Analysis result for one input file
struct FileAnalysis {
    summary: Summary,
    records: Vec<SentenceRecord>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting sentence length analysis");
        log::debug!("Arguments: {self:?}");

        let analyzer = Analyzer::new(self.effective_config()?);
        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Analyzing {} file(s), {} bytes",
            files.len(),
            FileReader::total_size(&files)
        );

        let annotator: Box<dyn Annotator> = if self.plain {
            Box::new(PlainTextAnnotator)
        } else {
            Box::new(MarkdownAnnotator::new())
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results: Vec<FileAnalysis> = files
            .par_iter()
            .map(|path| -> Result<FileAnalysis> {
                let analysis = analyze_file(path, &analyzer, annotator.as_ref())?;
                progress.file_completed(&path.display().to_string());
                Ok(analysis)
            })
            .collect::<Result<_>>()?;

        progress.finish();

        self.write_output(&files, &results)
    }

    /// Load the configuration and apply command-line overrides
    fn effective_config(&self) -> Result<Config> {
        let mut config = load_config(self.config.as_deref())?;
        if self.line_breaks {
            config.treat_line_break_as_sentence_end = true;
        }
        Ok(config)
    }

    fn write_output(&self, files: &[PathBuf], results: &[FileAnalysis]) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };

        let mut formatter = create_formatter(self.format, writer, files.len() > 1);
        let mut total = Summary::default();

        for (path, analysis) in files.iter().zip(results) {
            formatter.begin_file(&path.display().to_string())?;
            for record in &analysis.records {
                formatter.format_sentence(record)?;
            }
            total.merge(&analysis.summary);
        }

        formatter.finish(&SummaryRecord::new(files.len(), &total))?;
        log::info!(
            "Classified {} sentences in {} file(s)",
            total.sentences,
            files.len()
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn analyze_file(
    path: &Path,
    analyzer: &Analyzer,
    annotator: &dyn Annotator,
) -> Result<FileAnalysis> {
    let text = FileReader::read_text(path)?;
    let exclusions = ExclusionIndex::from_nodes(&annotator.annotate(&text));
    let sentences = analyzer.analyze(&text, &exclusions);

    log::debug!(
        "{}: {} sentences, {} excluded ranges",
        path.display(),
        sentences.len(),
        exclusions.len()
    );

    Ok(FileAnalysis {
        summary: Summary::from_sentences(&sentences),
        records: SentenceRecord::from_analysis(&path.display().to_string(), &text, &sentences),
    })
}
