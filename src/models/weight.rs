//! Syllable weights and weight patterns
//!
//! A `Weight` is the metrical value of one syllable: laghu (light) or
//! guru (heavy). A `Pattern` is the ordered weight sequence of one line
//! (or pada), written with one symbol code per syllable: `L` or `G`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metrical weight of a single syllable
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    /// Laghu - a metrically short syllable
    #[serde(rename = "L")]
    Light,
    /// Guru - a metrically long syllable
    #[serde(rename = "G")]
    Heavy,
}

impl Weight {
    /// Symbol code used in pattern strings
    pub fn code(self) -> char {
        match self {
            Weight::Light => 'L',
            Weight::Heavy => 'G',
        }
    }

    /// Parse a symbol code. Anything other than `L` or `G` is rejected.
    pub fn from_code(c: char) -> Option<Weight> {
        match c {
            'L' => Some(Weight::Light),
            'G' => Some(Weight::Heavy),
            _ => None,
        }
    }

    pub fn is_heavy(self) -> bool {
        self == Weight::Heavy
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error for a character that is not a weight symbol code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weight symbol {symbol:?} at offset {offset}")]
pub struct InvalidSymbol {
    pub symbol: char,
    pub offset: usize,
}

/// Ordered sequence of syllable weights for one line
///
/// Serializes as its symbol-code string (e.g. `"LGGLGG"`).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern(Vec<Weight>);

impl Pattern {
    pub fn new(weights: Vec<Weight>) -> Self {
        Self(weights)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn weights(&self) -> &[Weight] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Weight> + '_ {
        self.0.iter().copied()
    }

    /// Number of heavy syllables
    pub fn heavy_count(&self) -> usize {
        self.0.iter().filter(|w| w.is_heavy()).count()
    }

    /// Concatenate patterns in order into one flat pattern
    pub fn concat<'a>(patterns: impl IntoIterator<Item = &'a Pattern>) -> Pattern {
        Pattern(patterns.into_iter().flat_map(|p| p.0.iter().copied()).collect())
    }

    /// This pattern repeated `times` times
    pub fn repeat(&self, times: usize) -> Pattern {
        Pattern(self.0.repeat(times))
    }
}

impl From<Vec<Weight>> for Pattern {
    fn from(weights: Vec<Weight>) -> Self {
        Self(weights)
    }
}

impl FromStr for Pattern {
    type Err = InvalidSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(offset, symbol)| Weight::from_code(symbol).ok_or(InvalidSymbol { symbol, offset }))
            .collect::<Result<Vec<_>, _>>()
            .map(Pattern)
    }
}

impl TryFrom<String> for Pattern {
    type Error = InvalidSymbol;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pattern> for String {
    fn from(p: Pattern) -> String {
        p.to_string()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in &self.0 {
            write!(f, "{}", w.code())?;
        }
        Ok(())
    }
}
