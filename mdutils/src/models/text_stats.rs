// src/models/text_stats.rs
use std::ops::AddAssign;

/// Counters for one document, or the sum over many.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Maximal runs of non-whitespace characters.
    pub words: u64,
    /// Words holding at least one alphanumeric character.
    pub prose_words: u64,
    pub lines: u64,
    pub non_blank_lines: u64,
    pub paragraphs: u64,
    pub cjk: u64,
    pub hiragana: u64,
    pub katakana: u64,
    pub punctuation: u64,
    pub whitespace: u64,
    pub chars_no_spaces: u64,
    pub chars_with_spaces: u64,
}

impl TextStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: 0,
            prose_words: 0,
            lines: 0,
            non_blank_lines: 0,
            paragraphs: 0,
            cjk: 0,
            hiragana: 0,
            katakana: 0,
            punctuation: 0,
            whitespace: 0,
            chars_no_spaces: 0,
            chars_with_spaces: 0,
        }
    }

    /// Label/value pairs in display order, blank-line groups separated by `None`.
    #[must_use]
    pub fn rows(&self) -> Vec<Option<(&'static str, u64)>> {
        vec![
            Some(("Paragraphs:", self.paragraphs)),
            Some(("Non-Blank Lines:", self.non_blank_lines)),
            Some(("Lines:", self.lines)),
            None,
            Some(("Words:", self.words)),
            Some(("Prose Words:", self.prose_words)),
            Some(("Chinese:", self.cjk)),
            Some(("Hiragana:", self.hiragana)),
            Some(("Katakana:", self.katakana)),
            Some(("Punctuations:", self.punctuation)),
            Some(("Whitespaces:", self.whitespace)),
            None,
            Some(("Characters (no spaces):", self.chars_no_spaces)),
            Some(("Characters (with spaces):", self.chars_with_spaces)),
        ]
    }
}

impl AddAssign for TextStats {
    fn add_assign(&mut self, other: Self) {
        self.words = self.words.saturating_add(other.words);
        self.prose_words = self.prose_words.saturating_add(other.prose_words);
        self.lines = self.lines.saturating_add(other.lines);
        self.non_blank_lines = self.non_blank_lines.saturating_add(other.non_blank_lines);
        self.paragraphs = self.paragraphs.saturating_add(other.paragraphs);
        self.cjk = self.cjk.saturating_add(other.cjk);
        self.hiragana = self.hiragana.saturating_add(other.hiragana);
        self.katakana = self.katakana.saturating_add(other.katakana);
        self.punctuation = self.punctuation.saturating_add(other.punctuation);
        self.whitespace = self.whitespace.saturating_add(other.whitespace);
        self.chars_no_spaces = self.chars_no_spaces.saturating_add(other.chars_no_spaces);
        self.chars_with_spaces = self
            .chars_with_spaces
            .saturating_add(other.chars_with_spaces);
    }
}
