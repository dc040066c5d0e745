//! Exclusion ranges for structural regions that must not be highlighted
//!
//! A host's document analyzer reports structural nodes (code, comments,
//! links, headings...). Nodes whose kind label matches one of the exclusion
//! markers become closed ranges `[min, max]`; any candidate sentence that
//! touches one of them is skipped.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Kind-label substrings that mark a structural node as excluded
pub const DEFAULT_EXCLUSION_MARKERS: &[&str] =
    &["code", "comment", "link", "url", "header", "heading"];

/// A closed interval `[min, max]` of byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionRange {
    /// First offset covered by the range
    pub min: usize,
    /// Last offset covered by the range (inclusive)
    pub max: usize,
}

impl ExclusionRange {
    /// Create a new exclusion range
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether the half-open span `[start, end)` intersects this range
    ///
    /// `max` is inclusive, so a span starting exactly at `max` is still
    /// excluded.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        start <= self.max && end > self.min
    }
}

/// A structural annotation reported for a region of the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralNode {
    /// Kind label, e.g. `inline-code` or `header_header-2`
    pub kind: String,
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl StructuralNode {
    /// Create a new structural node
    pub fn new(kind: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind: kind.into(),
            start,
            end,
        }
    }
}

/// Set of exclusion ranges built once per analysis pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionIndex {
    ranges: SmallVec<[ExclusionRange; 8]>,
}

impl ExclusionIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from structural nodes using [`DEFAULT_EXCLUSION_MARKERS`]
    pub fn from_nodes<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a StructuralNode>,
    {
        Self::with_markers(nodes, DEFAULT_EXCLUSION_MARKERS)
    }

    /// Build an index from structural nodes using custom kind markers
    ///
    /// Marker matching is a case-sensitive substring test on the kind label.
    pub fn with_markers<'a, I, M>(nodes: I, markers: &[M]) -> Self
    where
        I: IntoIterator<Item = &'a StructuralNode>,
        M: AsRef<str>,
    {
        let mut index = Self::new();

        for node in nodes {
            if markers.iter().any(|m| node.kind.contains(m.as_ref())) {
                index.insert(ExclusionRange::new(node.start, node.end));
            } else {
                tracing::trace!(kind = %node.kind, "structural node not excluded");
            }
        }

        tracing::debug!(ranges = index.len(), "built exclusion index");
        index
    }

    /// Add a range to the index
    pub fn insert(&mut self, range: ExclusionRange) {
        self.ranges.push(range);
    }

    /// Whether any indexed range intersects the half-open span `[start, end)`
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.ranges.iter().any(|r| r.overlaps(start, end))
    }

    /// Number of indexed ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the index holds no ranges
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over the indexed ranges
    pub fn iter(&self) -> impl Iterator<Item = &ExclusionRange> {
        self.ranges.iter()
    }
}

impl FromIterator<ExclusionRange> for ExclusionIndex {
    fn from_iter<T: IntoIterator<Item = ExclusionRange>>(iter: T) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_boundaries() {
        let range = ExclusionRange::new(10, 20);

        // Entirely before
        assert!(!range.overlaps(0, 5));
        // Ends exactly at min: half-open end does not reach it
        assert!(!range.overlaps(0, 10));
        // Ends one past min
        assert!(range.overlaps(0, 11));
        // Starts exactly at max: max is inclusive
        assert!(range.overlaps(20, 30));
        // Starts past max
        assert!(!range.overlaps(21, 30));
        // Contained and containing
        assert!(range.overlaps(12, 15));
        assert!(range.overlaps(0, 100));
    }

    #[test]
    fn test_from_nodes_filters_by_kind() {
        let nodes = vec![
            StructuralNode::new("inline-code", 0, 5),
            StructuralNode::new("emphasis", 10, 15),
            StructuralNode::new("hmd-codeblock", 20, 30),
            StructuralNode::new("comment", 40, 45),
            StructuralNode::new("link", 50, 55),
            StructuralNode::new("url", 60, 65),
            StructuralNode::new("header_header-1", 70, 80),
            StructuralNode::new("strong", 90, 95),
        ];

        let index = ExclusionIndex::from_nodes(&nodes);
        assert_eq!(index.len(), 6);
        assert!(!index.overlaps(10, 15));
        assert!(!index.overlaps(90, 95));
        assert!(index.overlaps(72, 74));
    }

    #[test]
    fn test_marker_match_is_case_sensitive() {
        let nodes = vec![StructuralNode::new("InlineCode", 0, 5)];
        assert!(ExclusionIndex::from_nodes(&nodes).is_empty());

        let index = ExclusionIndex::with_markers(&nodes, &["Code"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_empty_index_never_overlaps() {
        let index = ExclusionIndex::new();
        assert!(index.is_empty());
        assert!(!index.overlaps(0, usize::MAX));
    }

    #[test]
    fn test_collect_ranges() {
        let index: ExclusionIndex = vec![ExclusionRange::new(0, 3), ExclusionRange::new(8, 9)]
            .into_iter()
            .collect();
        assert_eq!(index.iter().count(), 2);
        assert!(index.overlaps(9, 12));
    }
}
