//! Sentence length analysis: scanning, exclusion and classification

use std::ops::Range;

use crate::api::{ClassifiedSentence, Config};
use crate::domain::category::classify;
use crate::domain::exclusion::{ExclusionIndex, StructuralNode};
use crate::domain::scanner::{BoundarySet, SentenceScanner, TextSpan};
use crate::domain::words::count_words;

/// Runs analysis passes against one configuration snapshot
///
/// Each pass is a pure function of the text, the exclusion index and the
/// configuration captured at construction time.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: Config,
    boundaries: BoundarySet,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Analyzer {
    /// Create an analyzer for a configuration snapshot
    pub fn new(config: Config) -> Self {
        let boundaries = BoundarySet::from_config(&config);
        Self { config, boundaries }
    }

    /// Get the configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify every sentence of `text` that does not touch an exclusion
    ///
    /// Sentences are returned in ascending start order and never overlap.
    /// A disabled configuration returns nothing without scanning.
    pub fn analyze(&self, text: &str, exclusions: &ExclusionIndex) -> Vec<ClassifiedSentence> {
        if !self.config.enabled {
            return Vec::new();
        }

        let mut sentences = Vec::new();
        self.analyze_into(text, 0, exclusions, &mut sentences);

        tracing::debug!(
            bytes = text.len(),
            sentences = sentences.len(),
            "analysis pass complete"
        );
        sentences
    }

    /// Classify sentences inside the given sub-ranges of `text` only
    ///
    /// Hosts use this to limit work to the visible part of a document. Each
    /// range is scanned on its own and spans are reported in document
    /// offsets. Ranges are clamped to the text; a range that does not fall on
    /// character boundaries is skipped. A sentence overlapping one already
    /// reported from an earlier range is dropped.
    pub fn analyze_ranges(
        &self,
        text: &str,
        ranges: &[Range<usize>],
        exclusions: &ExclusionIndex,
    ) -> Vec<ClassifiedSentence> {
        if !self.config.enabled {
            return Vec::new();
        }

        let mut ordered: Vec<Range<usize>> = ranges
            .iter()
            .map(|r| {
                let end = r.end.min(text.len());
                r.start.min(end)..end
            })
            .collect();
        ordered.sort_by_key(|r| (r.start, r.end));

        let mut sentences = Vec::new();
        let mut scratch = Vec::new();

        for range in ordered {
            if !text.is_char_boundary(range.start) || !text.is_char_boundary(range.end) {
                tracing::warn!(
                    start = range.start,
                    end = range.end,
                    "skipping range that splits a character"
                );
                continue;
            }

            scratch.clear();
            self.analyze_into(&text[range.clone()], range.start, exclusions, &mut scratch);

            let last_end = sentences.last().map(ClassifiedSentence::end);
            sentences.extend(
                scratch
                    .drain(..)
                    .filter(|s| last_end.map_or(true, |end| s.start() >= end)),
            );
        }

        sentences
    }

    /// Scan `text`, which starts at `base` in the document, and push every
    /// surviving sentence into `out`
    fn analyze_into(
        &self,
        text: &str,
        base: usize,
        exclusions: &ExclusionIndex,
        out: &mut Vec<ClassifiedSentence>,
    ) {
        for local in SentenceScanner::new(text, self.boundaries.clone()) {
            let span = local.offset_by(base);

            if exclusions.overlaps(span.start, span.end) {
                tracing::trace!(start = span.start, end = span.end, "sentence excluded");
                continue;
            }

            out.push(self.classify_span(local.slice(text), span));
        }
    }

    fn classify_span(&self, sentence: &str, span: TextSpan) -> ClassifiedSentence {
        let word_count = count_words(sentence.trim());
        ClassifiedSentence {
            span,
            category: classify(word_count, &self.config.thresholds),
            word_count,
        }
    }
}

/// Run one analysis pass, building the exclusion index from structural nodes
pub fn analyze(text: &str, nodes: &[StructuralNode], config: &Config) -> Vec<ClassifiedSentence> {
    if !config.enabled {
        return Vec::new();
    }

    let exclusions = ExclusionIndex::from_nodes(nodes);
    Analyzer::new(config.clone()).analyze(text, &exclusions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::exclusion::ExclusionRange;

    fn labelled<'a>(text: &'a str, sentences: &[ClassifiedSentence]) -> Vec<(&'a str, Category)> {
        sentences
            .iter()
            .map(|s| (s.text(text), s.category))
            .collect()
    }

    #[test]
    fn test_basic_classification() {
        let text = "Hi. This is a test.";
        let sentences = Analyzer::default().analyze(text, &ExclusionIndex::new());

        assert_eq!(
            labelled(text, &sentences),
            vec![("Hi.", Category::Xs), ("This is a test.", Category::Sm)]
        );
        assert_eq!(sentences[0].word_count, 1);
        assert_eq!(sentences[1].word_count, 4);
    }

    #[test]
    fn test_disabled_returns_nothing() {
        let config = Config {
            enabled: false,
            ..Config::default()
        };
        let analyzer = Analyzer::new(config.clone());
        let text = "Plenty of text here. And more.";

        assert!(analyzer.analyze(text, &ExclusionIndex::new()).is_empty());
        assert!(analyzer
            .analyze_ranges(text, &[0..text.len()], &ExclusionIndex::new())
            .is_empty());
        assert!(analyze(text, &[], &config).is_empty());
    }

    #[test]
    fn test_excluded_sentences_are_skipped() {
        let text = "Keep this one. Skip `code` here. Keep again.";
        let code_start = text.find('`').unwrap();
        let nodes = vec![StructuralNode::new("inline-code", code_start, code_start + 6)];

        let sentences = analyze(text, &nodes, &Config::default());
        assert_eq!(
            labelled(text, &sentences),
            vec![("Keep this one.", Category::Sm), ("Keep again.", Category::Xs)]
        );
    }

    #[test]
    fn test_exclusion_boundary_is_inclusive_at_max() {
        // Range [0, 5] ends exactly where the second sentence starts
        let text = "One. Two words.";
        let index: ExclusionIndex = vec![ExclusionRange::new(0, 5)].into_iter().collect();
        let sentences = Analyzer::default().analyze(text, &index);
        assert!(sentences.is_empty());

        let index: ExclusionIndex = vec![ExclusionRange::new(0, 4)].into_iter().collect();
        let sentences = Analyzer::default().analyze(text, &index);
        assert_eq!(labelled(text, &sentences), vec![("Two words.", Category::Xs)]);
    }

    #[test]
    fn test_word_count_uses_trimmed_sentence() {
        let config = Config {
            treat_line_break_as_sentence_end: true,
            ..Config::default()
        };
        let text = "Hello\nworld.";
        let sentences = Analyzer::new(config).analyze(text, &ExclusionIndex::new());

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text(text), "Hello\n");
        assert_eq!(sentences[0].word_count, 1);
    }

    #[test]
    fn test_unpunctuated_heading_merges_into_next_sentence() {
        let text = "# Title\n\nFirst sentence here. Second.";
        let nodes = vec![StructuralNode::new("header", 0, 7)];

        // The heading has no ender, so its span runs on into the paragraph
        let sentences = analyze(text, &nodes, &Config::default());
        assert_eq!(labelled(text, &sentences), vec![("Second.", Category::Xs)]);

        let config = Config {
            treat_line_break_as_sentence_end: true,
            ..Config::default()
        };
        let sentences = analyze(text, &nodes, &config);
        assert_eq!(
            labelled(text, &sentences),
            vec![
                ("First sentence here.", Category::Sm),
                ("Second.", Category::Xs)
            ]
        );
    }

    #[test]
    fn test_analyze_ranges_uses_document_offsets() {
        let text = "First one here. Second one. Third sentence is here.";
        let second = text.find("Second").unwrap();
        let third = text.find("Third").unwrap();

        let analyzer = Analyzer::default();
        let sentences = analyzer.analyze_ranges(text, &[second..third], &ExclusionIndex::new());

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].start(), second);
        assert_eq!(sentences[0].text(text), "Second one.");
    }

    #[test]
    fn test_analyze_ranges_merges_overlapping_ranges() {
        let text = "Alpha beta. Gamma delta. Epsilon zeta.";
        let analyzer = Analyzer::default();
        let full = analyzer.analyze(text, &ExclusionIndex::new());

        let ranges = vec![12..text.len(), 0..25, 0..text.len()];
        let merged = analyzer.analyze_ranges(text, &ranges, &ExclusionIndex::new());

        assert_eq!(merged, full);
    }

    #[test]
    fn test_analyze_ranges_skips_invalid_ranges() {
        let text = "日本語です。次の文。";
        let analyzer = Analyzer::default();

        // Byte 1 is inside the first character
        let sentences = analyzer.analyze_ranges(text, &[1..9, 18..1000], &ExclusionIndex::new());
        assert_eq!(labelled(text, &sentences), vec![("次の文。", Category::Sm)]);
    }
}
