//! Forward sentence scanner
//!
//! The scanner walks the text left to right and reports non-overlapping
//! sentence spans. A sentence is:
//!
//! 1. a body of one or more characters that are not sentence enders,
//! 2. followed by one or more sentence enders (`...` and `?!` stay together),
//! 3. followed by any closing quotes (`" ” ' ’ 」`),
//! 4. followed by at most one space, which is consumed but not reported.
//!
//! The reported span drops any leading whitespace and `>` blockquote markers.
//! Text after the last ender is never reported.

use smallvec::SmallVec;

use crate::api::Config;

/// Characters that end a sentence by default
pub const DEFAULT_SENTENCE_ENDERS: [char; 7] = ['.', '!', '?', ':', '。', '…', '·'];

/// Closing quotes that stay attached to the end of a sentence
pub const CLOSING_QUOTES: [char; 5] = ['"', '\u{201D}', '\'', '\u{2019}', '」'];

/// A half-open byte span `[start, end)` of one detected sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextSpan {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl TextSpan {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether two spans share at least one byte
    pub fn intersects(&self, other: &TextSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Shift the span by `offset` bytes
    pub fn offset_by(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Slice the span out of `text`
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// The set of characters that end a sentence
///
/// Ender characters are also the characters a sentence body cannot contain.
/// Whether a line break is one of them depends on
/// [`Config::treat_line_break_as_sentence_end`]; without it, a sentence body
/// may run across line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySet {
    enders: SmallVec<[char; 16]>,
}

impl Default for BoundarySet {
    fn default() -> Self {
        Self::new(DEFAULT_SENTENCE_ENDERS)
    }
}

impl BoundarySet {
    /// Create a boundary set from explicit ender characters
    pub fn new(enders: impl IntoIterator<Item = char>) -> Self {
        let mut set = Self {
            enders: SmallVec::new(),
        };
        for ch in enders {
            set.insert(ch);
        }
        set
    }

    /// Build the boundary set described by a configuration
    pub fn from_config(config: &Config) -> Self {
        let mut set = Self::default();

        for ch in config.extra_sentence_enders.chars() {
            set.insert(ch);
        }

        if config.treat_line_break_as_sentence_end {
            set.insert('\n');
        }

        set
    }

    /// Add an ender character
    pub fn insert(&mut self, ch: char) {
        if !self.enders.contains(&ch) {
            self.enders.push(ch);
        }
    }

    /// Whether `ch` ends a sentence
    pub fn is_sentence_end(&self, ch: char) -> bool {
        self.enders.contains(&ch)
    }

    /// Whether `ch` may appear inside a sentence body
    pub fn allowed_in_body(&self, ch: char) -> bool {
        !self.is_sentence_end(ch)
    }

    /// The ender characters, in insertion order
    pub fn enders(&self) -> &[char] {
        &self.enders
    }
}

/// Outcome of trying to match a sentence at one position
enum Attempt {
    /// A sentence covering `[start, end)`, `end` including the optional trailing space
    Found {
        start: usize,
        end: usize,
        trailing_space: bool,
    },
    /// No sentence starts here; try the next character
    Skip,
    /// No sentence can start here or anywhere later
    Exhausted,
}

/// Lazy iterator over the sentence spans of a text
///
/// Scanning is deterministic; a fresh scanner over the same input yields the
/// same spans.
#[derive(Debug, Clone)]
pub struct SentenceScanner<'a> {
    text: &'a str,
    boundaries: BoundarySet,
    pos: usize,
}

impl<'a> SentenceScanner<'a> {
    /// Create a scanner over `text`
    pub fn new(text: &'a str, boundaries: BoundarySet) -> Self {
        Self {
            text,
            boundaries,
            pos: 0,
        }
    }

    /// The text being scanned
    pub fn text(&self) -> &'a str {
        self.text
    }

    fn attempt(&self, start: usize) -> Attempt {
        let mut chars = self.text[start..].char_indices().peekable();

        // Body: one or more characters that are not enders
        let mut body_len = 0;
        while let Some(&(_, ch)) = chars.peek() {
            if !self.boundaries.allowed_in_body(ch) {
                break;
            }
            body_len += 1;
            chars.next();
        }

        if chars.peek().is_none() {
            return Attempt::Exhausted;
        }
        if body_len == 0 {
            return Attempt::Skip;
        }

        // Ender run
        while let Some(&(_, ch)) = chars.peek() {
            if !self.boundaries.is_sentence_end(ch) {
                break;
            }
            chars.next();
        }

        // Closing quotes
        while let Some(&(_, ch)) = chars.peek() {
            if !CLOSING_QUOTES.contains(&ch) {
                break;
            }
            chars.next();
        }

        let mut trailing_space = false;
        if let Some(&(_, ' ')) = chars.peek() {
            trailing_space = true;
            chars.next();
        }

        let end = match chars.peek() {
            Some(&(offset, _)) => start + offset,
            None => self.text.len(),
        };

        Attempt::Found {
            start,
            end,
            trailing_space,
        }
    }

    /// Trim a raw match into the reported span
    fn trim(&self, start: usize, end: usize, trailing_space: bool) -> Option<TextSpan> {
        let end = if trailing_space { end - 1 } else { end };

        let leading = self.text[start..end]
            .char_indices()
            .find(|&(_, ch)| !(ch.is_whitespace() || ch == '>'))
            .map(|(offset, _)| offset)?;

        Some(TextSpan::new(start + leading, end))
    }
}

impl Iterator for SentenceScanner<'_> {
    type Item = TextSpan;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            match self.attempt(self.pos) {
                Attempt::Found {
                    start,
                    end,
                    trailing_space,
                } => {
                    self.pos = end;
                    match self.trim(start, end, trailing_space) {
                        Some(span) => return Some(span),
                        None => tracing::trace!(start, end, "dropped blank sentence"),
                    }
                }
                Attempt::Skip => {
                    let step = self.text[self.pos..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                    self.pos += step;
                }
                Attempt::Exhausted => {
                    self.pos = self.text.len();
                }
            }
        }

        None
    }
}

/// Scan `text` with the boundary rules of `config`
pub fn scan<'a>(text: &'a str, config: &Config) -> SentenceScanner<'a> {
    SentenceScanner::new(text, BoundarySet::from_config(config))
}
