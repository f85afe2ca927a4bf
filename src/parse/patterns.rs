//! Weight-pattern builder
//!
//! Maps each preprocessed line to its weight pattern through a
//! `Syllabizer`. A failing line is recorded as failed and contributes an
//! empty pattern; the remaining lines are still analyzed.

use crate::models::{LineAnalysis, LineOutcome, Pattern};
use crate::parse::syllabize::{SyllabizeError, Syllabizer};

/// Syllabize one line
pub fn build_line(syllabizer: &dyn Syllabizer, line: &str) -> LineAnalysis {
    let outcome = match scan_line(syllabizer, line) {
        Ok((syllables, pattern)) => LineOutcome::Parsed {
            syllables,
            weights: pattern.weights().to_vec(),
            pattern,
        },
        Err(e) => {
            log::warn!("⚠️ could not syllabize '{}': {}", line, e);
            LineOutcome::Failed { error: e.to_string() }
        }
    };

    LineAnalysis {
        text: line.to_string(),
        outcome,
    }
}

/// Syllabize every line in verse order
pub fn build_lines(syllabizer: &dyn Syllabizer, lines: &[String]) -> Vec<LineAnalysis> {
    lines.iter().map(|line| build_line(syllabizer, line)).collect()
}

/// Pattern lines for statistics and identification (failed lines are empty)
pub fn pattern_lines(analyses: &[LineAnalysis]) -> Vec<Pattern> {
    analyses.iter().map(LineAnalysis::pattern).collect()
}

fn scan_line(
    syllabizer: &dyn Syllabizer,
    line: &str,
) -> Result<(Vec<String>, Pattern), SyllabizeError> {
    let syllables = syllabizer.syllables(line)?;
    let pattern = syllabizer.pattern(line)?;
    if syllables.len() != pattern.len() {
        return Err(SyllabizeError::LengthMismatch {
            syllables: syllables.len(),
            weights: pattern.len(),
        });
    }
    Ok((syllables, pattern))
}
