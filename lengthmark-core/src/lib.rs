//! Sentence length classification for prose highlighting
//!
//! The engine splits text into sentences, skips sentences that touch
//! excluded regions (code, comments, links, headings), counts the words of
//! each remaining sentence and sorts it into one of five length categories.
//! A presentation layer then decorates each span by category.
//!
//! # Architecture
//!
//! - **Domain layer**: scanner, word counter, exclusion index, classifier
//! - **API layer**: configuration, analysis passes and output types
//!
//! # Example
//!
//! ```rust
//! use lengthmark_core::{analyze, Category, Config, StructuralNode};
//!
//! let text = "Hi. This is a test. See `code` here.";
//! let nodes = vec![StructuralNode::new("inline-code", 24, 30)];
//!
//! let sentences = analyze(text, &nodes, &Config::default());
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0].text(text), "Hi.");
//! assert_eq!(sentences[0].category, Category::Xs);
//! assert_eq!(sentences[1].text(text), "This is a test.");
//! assert_eq!(sentences[1].category, Category::Sm);
//! ```

pub mod api;
pub mod domain;

pub use api::{
    analyze, char_offsets, Analyzer, ClassifiedSentence, Config, ConfigBuilder, Error, Palette,
    Result, Summary, Thresholds,
};
pub use domain::{
    classify, count_words, scan, BoundarySet, Category, ExclusionIndex, ExclusionRange,
    SentenceScanner, StructuralNode, TextSpan,
};
