//! Markdown structure detection
//!
//! A lightweight, regex-based pass that finds the regions a markdown editor
//! would render as code, comments, links, URLs or headings. Node kinds are
//! chosen so the core's default exclusion markers match them.

use std::sync::OnceLock;

use lengthmark_core::StructuralNode;
use regex::Regex;

use super::Annotator;

struct Pattern {
    kind: &'static str,
    regex: Regex,
}

fn patterns() -> &'static [Pattern] {
    static PATTERNS: OnceLock<Vec<Pattern>> = OnceLock::new();

    PATTERNS.get_or_init(|| {
        let table: [(&'static str, &str); 9] = [
            // Fenced code blocks; an unterminated fence runs to the end
            (
                "code-block",
                r"(?ms)^[ ]{0,3}```.*?(?:^[ ]{0,3}```[ \t]*$|\z)",
            ),
            ("code-block", r"(?ms)^[ ]{0,3}~~~.*?(?:^[ ]{0,3}~~~[ \t]*$|\z)"),
            ("inline-code", r"`[^`\n]+`"),
            ("comment", r"(?s)<!--.*?-->"),
            ("comment", r"(?s)%%.*?%%"),
            ("internal-link", r"!?\[\[[^\]\n]*\]\]"),
            ("link", r"!?\[[^\]\n]*\]\([^)\n]*\)"),
            ("url", r"https?://[^\s<>()\[\]`]+"),
            ("header", r"(?m)^[ ]{0,3}#{1,6}(?:[ \t][^\n]*)?$"),
        ];

        table
            .into_iter()
            .map(|(kind, pattern)| Pattern {
                kind,
                regex: Regex::new(pattern).expect("valid markdown structure regex"),
            })
            .collect()
    })
}

/// Annotator recognising common markdown structure
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownAnnotator;

impl MarkdownAnnotator {
    /// Create a markdown annotator
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for MarkdownAnnotator {
    fn annotate(&self, text: &str) -> Vec<StructuralNode> {
        let mut nodes: Vec<StructuralNode> = patterns()
            .iter()
            .flat_map(|pattern| {
                pattern
                    .regex
                    .find_iter(text)
                    .filter(|m| !m.is_empty())
                    .map(|m| StructuralNode::new(pattern.kind, m.start(), m.end()))
            })
            .collect();

        nodes.sort_by_key(|node| (node.start, node.end));
        log::trace!("found {} markdown structure nodes", nodes.len());
        nodes
    }
}
