//! Structural annotation of input documents
//!
//! Annotators stand in for a host's document structure analyzer: they report
//! `(kind, start, end)` nodes that the core turns into exclusion ranges.

use lengthmark_core::StructuralNode;

pub mod markdown;

pub use markdown::MarkdownAnnotator;

/// Source of structural nodes for a document
pub trait Annotator: Send + Sync {
    /// Report the structural nodes of `text`, in byte offsets
    fn annotate(&self, text: &str) -> Vec<StructuralNode>;
}

/// Annotator for plain text: no structure, nothing excluded
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextAnnotator;

impl Annotator for PlainTextAnnotator {
    fn annotate(&self, _text: &str) -> Vec<StructuralNode> {
        Vec::new()
    }
}
