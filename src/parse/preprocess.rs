//! Verse preprocessing
//!
//! Strips verse markers and dandas, normalizes whitespace and splits the
//! verse into the lines that get syllabized.

use lazy_static::lazy_static;
use regex::Regex;

/// Double danda: closes a verse, and pairs of it enclose verse numbers
pub const DOUBLE_DANDA: char = '॥';
/// Single danda: closes a half-verse
pub const DANDA: char = '।';

lazy_static! {
    /// `॥...॥` on one line, non-greedy (verse numbers like `॥१॥`)
    static ref VERSE_MARKER: Regex = Regex::new(r"॥.*?॥").expect("verse marker regex");
    /// Whitespace runs that do not contain a line break
    static ref INLINE_SPACE: Regex = Regex::new(r"[^\S\r\n]+").expect("inline space regex");
}

/// Result of preprocessing one verse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    /// Verse text after marker removal and whitespace normalization
    pub cleaned: String,
    /// Analyzable lines in verse order
    pub lines: Vec<String>,
}

/// Clean a verse and split it into lines
///
/// Never fails: an empty or all-marker verse yields no lines.
pub fn preprocess(verse: &str) -> Preprocessed {
    let cleaned = clean_verse(verse);
    let lines = split_lines(&cleaned);
    log::debug!("preprocess: {} line(s) from {} chars", lines.len(), verse.chars().count());
    Preprocessed { cleaned, lines }
}

/// Remove markers and dandas, collapse whitespace, trim
pub fn clean_verse(verse: &str) -> String {
    let without_markers = VERSE_MARKER.replace_all(verse, "");
    let without_dandas = without_markers.replace(DANDA, "");
    let normalized = without_dandas.replace("\r\n", "\n");
    INLINE_SPACE.replace_all(&normalized, " ").trim().to_string()
}

fn split_lines(cleaned: &str) -> Vec<String> {
    cleaned
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_delimiter_only(line))
        .map(str::to_string)
        .collect()
}

fn is_delimiter_only(line: &str) -> bool {
    line.chars().all(|c| c == DOUBLE_DANDA || c == DANDA || c.is_whitespace())
}
