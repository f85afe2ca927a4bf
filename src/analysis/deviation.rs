//! Deviation analysis
//!
//! Aligns the observed verse against a candidate meter's expanded template
//! position by position and reports every mismatch with its line and
//! position within the line. Only the overlapping prefix of the two
//! sequences is compared: no padding, no wraparound.

use crate::catalog::MeterCatalog;
use crate::models::{CatalogFault, Deviation, DeviationReport, MeterTemplate, Pattern};

/// Align the observed lines against one template
pub fn analyze_deviation(meter: &str, template: &MeterTemplate, observed_lines: &[Pattern]) -> DeviationReport {
    let target = template.expand();
    let observed = Pattern::concat(observed_lines);
    let compared = observed.len().min(target.len());

    let mut matches = 0usize;
    let mut deviations = Vec::new();
    for (position, (actual, expected)) in observed.iter().zip(target.iter()).enumerate() {
        if actual == expected {
            matches += 1;
            continue;
        }
        let (line, position_in_line) = locate(observed_lines, position);
        deviations.push(Deviation {
            position,
            line,
            position_in_line,
            actual,
            expected,
        });
    }

    let match_percentage = if compared > 0 {
        matches as f64 / compared as f64 * 100.0
    } else {
        0.0
    };

    DeviationReport {
        meter: meter.to_string(),
        match_percentage,
        deviations,
    }
}

/// Map a flat position to a 1-based (line, position in line)
///
/// Walks the cumulative line lengths; empty lines are skipped over.
pub fn locate(lines: &[Pattern], position: usize) -> (usize, usize) {
    let mut remaining = position;
    for (i, line) in lines.iter().enumerate() {
        if remaining < line.len() {
            return (i + 1, remaining + 1);
        }
        remaining -= line.len();
    }
    // Past the end of the observed lines
    (1, position + 1)
}

/// Deviation reports for every partially matched meter
///
/// Meters missing from the catalog are skipped; meters whose entry is
/// malformed are returned as faults instead of reports.
pub fn analyze_candidates<'a>(
    meters: impl IntoIterator<Item = &'a str>,
    catalog: &MeterCatalog,
    observed_lines: &[Pattern],
) -> (Vec<DeviationReport>, Vec<CatalogFault>) {
    let mut reports = Vec::new();
    let mut faults = Vec::new();

    for meter in meters {
        match catalog.template(meter) {
            Some(Ok(template)) => {
                let report = analyze_deviation(meter, &template, observed_lines);
                log::debug!(
                    "deviation vs {}: {:.2}% match, {} mismatch(es)",
                    meter,
                    report.match_percentage,
                    report.deviations.len()
                );
                reports.push(report);
            }
            Some(Err(e)) => {
                log::warn!("❌ catalog entry for '{}' is malformed: {}", meter, e);
                faults.push(CatalogFault {
                    meter: meter.to_string(),
                    message: e.to_string(),
                });
            }
            None => {
                log::warn!("⚠️ no template for matched meter '{}', skipping deviation analysis", meter);
            }
        }
    }

    (reports, faults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawPattern, Weight};

    fn patterns(ps: &[&str]) -> Vec<Pattern> {
        ps.iter().map(|p| p.parse().unwrap()).collect()
    }

    fn sama(p: &str) -> MeterTemplate {
        MeterTemplate::from_raw("m", &RawPattern::Single(p.to_string())).unwrap()
    }

    #[test]
    fn test_locate_across_lines() {
        let lines = patterns(&["LLLL", "GGG"]);
        assert_eq!(locate(&lines, 5), (2, 2));
        assert_eq!(locate(&lines, 0), (1, 1));
        assert_eq!(locate(&lines, 3), (1, 4));
        assert_eq!(locate(&lines, 4), (2, 1));
    }

    #[test]
    fn test_locate_skips_empty_lines() {
        let lines = patterns(&["LG", "", "GGG"]);
        assert_eq!(locate(&lines, 2), (3, 1));
    }

    #[test]
    fn test_single_mismatch() {
        let observed = patterns(&["LGLGLGLG", "LGGGLGLG", "LGLGLGLG", "LGLGLGLG"]);
        let report = analyze_deviation("pramanika", &sama("LGLGLGLG"), &observed);

        assert_eq!(report.deviations.len(), 1);
        let d = &report.deviations[0];
        assert_eq!(d.position, 10);
        assert_eq!((d.line, d.position_in_line), (2, 3));
        assert_eq!(d.actual, Weight::Heavy);
        assert_eq!(d.expected, Weight::Light);
        assert!((report.match_percentage - 31.0 / 32.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_overlap_compared() {
        // 6 observed vs 16 expected: only the first 6 positions count
        let observed = patterns(&["LGLG", "LL"]);
        let report = analyze_deviation("m", &sama("LGLG"), &observed);
        assert_eq!(report.deviations.len(), 1);
        assert_eq!(report.deviations[0].position, 5);
        assert!((report.match_percentage - 5.0 / 6.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_observed() {
        let report = analyze_deviation("m", &sama("LG"), &[]);
        assert_eq!(report.match_percentage, 0.0);
        assert!(report.deviations.is_empty());
    }

    #[test]
    fn test_candidates_gap_and_fault() {
        let catalog = MeterCatalog::from_yaml_str(
            "- {name: ok, pattern: LG}\n- {name: bad, pattern: [LG, GL, LL]}\n",
        )
        .unwrap();
        let observed = patterns(&["LGLG", "LGGG"]);
        let (reports, faults) = analyze_candidates(["ok", "missing", "bad"], &catalog, &observed);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].meter, "ok");
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].meter, "bad");
        assert!(faults[0].message.contains("3 patterns"));
    }
}
