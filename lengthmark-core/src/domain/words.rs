//! Unicode-aware word counting
//!
//! Two kinds of tokens are recognised:
//! - Latin words: maximal runs of ASCII letters/digits, Latin-1 Supplement
//!   letters and Latin Extended-A letters. A single apostrophe (`'` or `’`)
//!   followed by more word characters joins the run, so `it's`,
//!   `O'Malley` and `rock'n'roll` are one word each.
//! - CJK and Hangul characters: every ideograph, kana or Hangul syllable is
//!   a word on its own, adjacent characters are never merged.
//!
//! Everything else (whitespace, punctuation, symbols) separates words.

/// Whether `ch` can be part of a Latin word run
pub fn is_latin_word_char(ch: char) -> bool {
    match ch {
        'A'..='Z' | 'a'..='z' | '0'..='9' => true,
        // Latin-1 Supplement letters, without the multiplication and division signs
        '\u{00C0}'..='\u{00FF}' => !matches!(ch, '\u{00D7}' | '\u{00F7}'),
        // Latin Extended-A
        '\u{0100}'..='\u{017F}' => true,
        _ => false,
    }
}

/// Whether `ch` counts as a standalone word (CJK ideographs, kana, Hangul)
pub fn is_standalone_word_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{3040}'..='\u{309F}'   // Hiragana
            | '\u{30A0}'..='\u{30FF}' // Katakana
            | '\u{3400}'..='\u{4DBF}' // CJK Unified Ideographs Extension A
            | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
            | '\u{AC00}'..='\u{D7AF}' // Hangul Syllables
            | '\u{F900}'..='\u{FAFF}' // CJK Compatibility Ideographs
            | '\u{FF66}'..='\u{FF9F}' // Halfwidth Katakana
    )
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

/// Iterator over the words of a sentence
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Words<'a> {
    /// Create a word iterator over `text`
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte offset just past the Latin run starting at `start`
    fn latin_run_end(&self, start: usize) -> usize {
        let mut end = start;
        let mut chars = self.text[start..].chars().peekable();

        while let Some(ch) = chars.next() {
            if is_latin_word_char(ch) {
                end += ch.len_utf8();
                continue;
            }

            // An apostrophe only joins the run when a word character follows it
            if is_apostrophe(ch) && chars.peek().copied().is_some_and(is_latin_word_char) {
                end += ch.len_utf8();
                continue;
            }

            break;
        }

        end
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ch) = self.text[self.pos..].chars().next() {
            let start = self.pos;

            if is_latin_word_char(ch) {
                let end = self.latin_run_end(start);
                self.pos = end;
                return Some(&self.text[start..end]);
            }

            self.pos += ch.len_utf8();
            if is_standalone_word_char(ch) {
                return Some(&self.text[start..self.pos]);
            }
        }

        None
    }
}

/// Iterate over the words of `sentence`
pub fn words(sentence: &str) -> Words<'_> {
    Words::new(sentence)
}

/// Count the words of `sentence`
///
/// Returns 0 for empty, whitespace-only and punctuation-only input.
pub fn count_words(sentence: &str) -> usize {
    words(sentence).count()
}
