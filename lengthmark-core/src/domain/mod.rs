//! Domain layer for sentence length analysis
//!
//! Pure building blocks with no configuration loading or I/O: the sentence
//! scanner, the word counter, the exclusion index and the classifier.

pub mod category;
pub mod exclusion;
pub mod scanner;
pub mod words;

pub use category::{classify, Category, ParseCategoryError};
pub use exclusion::{ExclusionIndex, ExclusionRange, StructuralNode, DEFAULT_EXCLUSION_MARKERS};
pub use scanner::{
    scan, BoundarySet, SentenceScanner, TextSpan, CLOSING_QUOTES, DEFAULT_SENTENCE_ENDERS,
};
pub use words::{count_words, words, Words};
