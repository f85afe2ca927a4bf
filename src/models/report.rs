//! Verification report types
//!
//! Everything here is created fresh per `verify` call and serialized as-is
//! to JSON (CLI) or JS values (WASM API).

use crate::models::template::ShapeKind;
use crate::models::weight::{Pattern, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Confidence reported for an exact match (percent)
pub const EXACT_MATCH_CONFIDENCE: f64 = 100.0;

/// Catalog metadata attached to an identified meter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeterMatch {
    pub shape: ShapeKind,
    pub description: String,
}

/// Identification verdict for one verse
///
/// `exact` takes precedence over `partial`; the two never coexist here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identification {
    ExactMatch { meters: BTreeMap<String, MeterMatch> },
    PartialMatch { meters: BTreeMap<String, MeterMatch> },
    NoMatch,
}

impl Identification {
    /// Matched meter names in mapping order
    pub fn meter_names(&self) -> Vec<String> {
        match self {
            Identification::ExactMatch { meters } | Identification::PartialMatch { meters } => {
                meters.keys().cloned().collect()
            }
            Identification::NoMatch => Vec::new(),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Identification::ExactMatch { .. })
    }
}

/// Aggregate weight counts over the whole verse
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PatternStatistics {
    pub total_syllables: usize,
    pub guru_count: usize,
    pub laghu_count: usize,
    /// Heavy share in percent, 0 for an empty verse
    pub guru_percentage: f64,
}

/// One mismatched position between the observed and expected pattern
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Deviation {
    /// 0-based index into the concatenated pattern
    pub position: usize,
    /// 1-based observed line number
    pub line: usize,
    /// 1-based position within that line
    pub position_in_line: usize,
    pub actual: Weight,
    pub expected: Weight,
}

/// Alignment of the verse against one candidate meter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeviationReport {
    pub meter: String,
    /// 0..=100
    pub match_percentage: f64,
    pub deviations: Vec<Deviation>,
}

/// A matched meter whose catalog entry could not be turned into a template
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CatalogFault {
    pub meter: String,
    pub message: String,
}

/// The externally visible verdict
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerificationDetails {
    pub is_valid_meter: bool,
    /// Percent: 100 for exact, the configured flat value for partial, 0 otherwise
    pub confidence_score: f64,
    /// Best `match_percentage` among the deviation reports, if any were produced
    pub best_match_percentage: Option<f64>,
    pub matched_meters: Vec<String>,
    pub pattern_statistics: PatternStatistics,
    pub deviation_analysis: Vec<DeviationReport>,
    pub catalog_faults: Vec<CatalogFault>,
}

/// Syllabization outcome for one line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineOutcome {
    Parsed {
        syllables: Vec<String>,
        weights: Vec<Weight>,
        pattern: Pattern,
    },
    Failed {
        error: String,
    },
}

/// Per-line breakdown shown alongside the verdict
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineAnalysis {
    pub text: String,
    #[serde(flatten)]
    pub outcome: LineOutcome,
}

impl LineAnalysis {
    /// Weight pattern for statistics and alignment; empty when the line failed
    pub fn pattern(&self) -> Pattern {
        match &self.outcome {
            LineOutcome::Parsed { pattern, .. } => pattern.clone(),
            LineOutcome::Failed { .. } => Pattern::empty(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, LineOutcome::Failed { .. })
    }
}

/// Everything `verify` produces for one verse
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerificationReport {
    pub input_verse: String,
    pub cleaned_verse: String,
    pub lines: Vec<String>,
    pub syllable_info: Vec<LineAnalysis>,
    pub pattern_lines: Vec<Pattern>,
    pub identification: Identification,
    pub verification_details: VerificationDetails,
}
