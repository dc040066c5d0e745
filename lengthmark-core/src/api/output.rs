//! Output types for the analysis API

use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::scanner::TextSpan;

/// A detected sentence with its length category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedSentence {
    /// Byte span of the sentence in the analyzed text
    pub span: TextSpan,
    /// Assigned length category
    pub category: Category,
    /// Number of words counted in the sentence
    pub word_count: usize,
}

impl ClassifiedSentence {
    /// Byte offset of the first character
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last character
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The sentence text, sliced from the analyzed `text`
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        self.span.slice(text)
    }
}

/// Per-category totals over one analysis pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of classified sentences
    pub sentences: usize,
    /// Total words over all classified sentences
    pub words: usize,
    /// Sentence count per category, indexed like [`Category::ALL`]
    pub per_category: [usize; 5],
}

impl Summary {
    /// Summarize a set of classified sentences
    pub fn from_sentences(sentences: &[ClassifiedSentence]) -> Self {
        let mut summary = Self::default();
        for sentence in sentences {
            summary.add(sentence);
        }
        summary
    }

    /// Add one sentence to the totals
    pub fn add(&mut self, sentence: &ClassifiedSentence) {
        self.sentences += 1;
        self.words += sentence.word_count;
        self.per_category[sentence.category.index()] += 1;
    }

    /// Merge another summary into this one
    pub fn merge(&mut self, other: &Summary) {
        self.sentences += other.sentences;
        self.words += other.words;
        for (total, count) in self.per_category.iter_mut().zip(other.per_category) {
            *total += count;
        }
    }

    /// Sentence count for one category
    pub fn count(&self, category: Category) -> usize {
        self.per_category[category.index()]
    }

    /// Average words per sentence
    pub fn average_words(&self) -> f32 {
        if self.sentences == 0 {
            0.0
        } else {
            self.words as f32 / self.sentences as f32
        }
    }
}

/// Convert byte offsets into character offsets
///
/// The offsets are processed in one forward pass when sorted ascending;
/// unsorted input is still handled by restarting the count. Offsets past the
/// end of `text` are clamped.
pub fn char_offsets(text: &str, byte_offsets: &[usize]) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut result = Vec::with_capacity(byte_offsets.len());
    let mut byte = 0;
    let mut chars = 0;

    for &target in byte_offsets {
        let target = target.min(bytes.len());
        if target < byte {
            byte = 0;
            chars = 0;
        }

        // Every byte that is not a UTF-8 continuation byte starts a character
        chars += bytes[byte..target]
            .iter()
            .filter(|&&b| (b as i8) >= -0x40)
            .count();
        byte = target;
        result.push(chars);
    }

    result
}
