//! Verification composer
//!
//! Three-way decision on the identification verdict:
//! exact -> valid, full confidence, no deviation analysis;
//! partial -> not valid, flat partial confidence, deviation analysis per meter;
//! none -> not valid, zero confidence.

use crate::analysis::deviation::analyze_candidates;
use crate::analysis::statistics::pattern_statistics;
use crate::catalog::MeterCatalog;
use crate::models::{Identification, Pattern, VerificationDetails, EXACT_MATCH_CONFIDENCE};

pub fn compose_details(
    identification: &Identification,
    patterns: &[Pattern],
    catalog: &MeterCatalog,
    partial_confidence: f64,
) -> VerificationDetails {
    let pattern_statistics = pattern_statistics(patterns);
    let matched_meters = identification.meter_names();

    match identification {
        Identification::ExactMatch { .. } => VerificationDetails {
            is_valid_meter: true,
            confidence_score: EXACT_MATCH_CONFIDENCE,
            best_match_percentage: None,
            matched_meters,
            pattern_statistics,
            deviation_analysis: Vec::new(),
            catalog_faults: Vec::new(),
        },
        Identification::PartialMatch { .. } => {
            let (deviation_analysis, catalog_faults) =
                analyze_candidates(matched_meters.iter().map(String::as_str), catalog, patterns);
            let best_match_percentage = deviation_analysis
                .iter()
                .map(|r| r.match_percentage)
                .fold(None, |best: Option<f64>, p| Some(best.map_or(p, |b| b.max(p))));

            VerificationDetails {
                is_valid_meter: false,
                confidence_score: partial_confidence,
                best_match_percentage,
                matched_meters,
                pattern_statistics,
                deviation_analysis,
                catalog_faults,
            }
        }
        Identification::NoMatch => VerificationDetails {
            is_valid_meter: false,
            confidence_score: 0.0,
            best_match_percentage: None,
            matched_meters,
            pattern_statistics,
            deviation_analysis: Vec::new(),
            catalog_faults: Vec::new(),
        },
    }
}
