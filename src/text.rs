//! Word, character, and reading-time statistics.

use serde::Serialize;

/// Words-per-minute figure the reading-time estimate assumes.
const READING_WPM: usize = 200;

/// Counts for a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    /// Unicode scalar values, whitespace included.
    pub characters: usize,
    pub characters_no_spaces: usize,
    /// Estimated reading time in whole minutes, rounded up.
    pub reading_minutes: usize,
}

/// Count words (whitespace-separated), characters, and reading time.
pub fn word_stats(text: &str) -> TextStats {
    let words = text.split_whitespace().count();
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    TextStats {
        words,
        characters,
        characters_no_spaces,
        reading_minutes: words.div_ceil(READING_WPM),
    }
}
