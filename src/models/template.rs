//! Canonical meter templates
//!
//! Catalog entries store a pattern either as a single string (sama) or a
//! list of strings (ardhasama with 2, visama with 4). `MeterTemplate` is the
//! validated, tagged form of that entry.

use crate::models::weight::Pattern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of padas (quarter-verses) in a four-part meter
pub const PADAS_PER_VERSE: usize = 4;

/// Pattern as it appears in catalog data
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawPattern {
    Single(String),
    List(Vec<String>),
}

impl RawPattern {
    /// Total syllables in a full verse of this pattern
    pub fn syllable_count(&self) -> usize {
        match self {
            RawPattern::Single(p) => p.chars().count() * PADAS_PER_VERSE,
            // Odd/even pair covers half a verse
            RawPattern::List(list) if list.len() == 2 => {
                list.iter().map(|p| p.chars().count()).sum::<usize>() * 2
            }
            RawPattern::List(list) => list.iter().map(|p| p.chars().count()).sum(),
        }
    }
}

/// Template topology
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Sama,
    Ardhasama,
    Visama,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Sama => "sama",
            ShapeKind::Ardhasama => "ardhasama",
            ShapeKind::Visama => "visama",
        }
    }
}

/// Problems found while turning catalog data into a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Pattern list with a length other than 2 or 4
    #[error("meter '{meter}' has {count} patterns; expected 2 or 4")]
    InvalidShape { meter: String, count: usize },

    #[error("meter '{meter}' contains invalid weight symbol {symbol:?}")]
    InvalidSymbol { meter: String, symbol: char },

    #[error("meter '{meter}' has an empty pattern")]
    EmptyPattern { meter: String },
}

/// Canonical expected pattern for a named meter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum MeterTemplate {
    /// One pada shape used for all four padas
    Sama { pada: Pattern },
    /// Odd and even pada shapes, alternating
    Ardhasama { odd: Pattern, even: Pattern },
    /// Four distinct pada shapes
    Visama { padas: [Pattern; 4] },
}

impl MeterTemplate {
    /// Validate a raw catalog pattern for `meter`
    pub fn from_raw(meter: &str, raw: &RawPattern) -> Result<Self, TemplateError> {
        let parse = |s: &str| -> Result<Pattern, TemplateError> {
            let pattern = s.parse::<Pattern>().map_err(|e| TemplateError::InvalidSymbol {
                meter: meter.to_string(),
                symbol: e.symbol,
            })?;
            if pattern.is_empty() {
                return Err(TemplateError::EmptyPattern { meter: meter.to_string() });
            }
            Ok(pattern)
        };

        match raw {
            RawPattern::Single(p) => Ok(MeterTemplate::Sama { pada: parse(p)? }),
            RawPattern::List(list) => match list.as_slice() {
                [odd, even] => Ok(MeterTemplate::Ardhasama {
                    odd: parse(odd)?,
                    even: parse(even)?,
                }),
                [a, b, c, d] => Ok(MeterTemplate::Visama {
                    padas: [parse(a)?, parse(b)?, parse(c)?, parse(d)?],
                }),
                _ => Err(TemplateError::InvalidShape {
                    meter: meter.to_string(),
                    count: list.len(),
                }),
            },
        }
    }

    pub fn shape(&self) -> ShapeKind {
        match self {
            MeterTemplate::Sama { .. } => ShapeKind::Sama,
            MeterTemplate::Ardhasama { .. } => ShapeKind::Ardhasama,
            MeterTemplate::Visama { .. } => ShapeKind::Visama,
        }
    }

    /// The four padas in verse order
    pub fn padas(&self) -> [&Pattern; 4] {
        match self {
            MeterTemplate::Sama { pada } => [pada, pada, pada, pada],
            MeterTemplate::Ardhasama { odd, even } => [odd, even, odd, even],
            MeterTemplate::Visama { padas } => [&padas[0], &padas[1], &padas[2], &padas[3]],
        }
    }

    /// The two half-verses (padas 1+2 and 3+4)
    pub fn halves(&self) -> [Pattern; 2] {
        let [a, b, c, d] = self.padas();
        [Pattern::concat([a, b]), Pattern::concat([c, d])]
    }

    /// Full-verse expected pattern
    ///
    /// sama `P` -> `P+P+P+P`, ardhasama `[A, B]` -> `A+B+A+B`,
    /// visama `[A, B, C, D]` -> `A+B+C+D`.
    pub fn expand(&self) -> Pattern {
        match self {
            MeterTemplate::Sama { pada } => pada.repeat(PADAS_PER_VERSE),
            _ => Pattern::concat(self.padas()),
        }
    }
}
