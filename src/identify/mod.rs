//! Meter identification
//!
//! `Identifier` is the catalog-matching seam. Its raw result carries two
//! mappings (`exact`, `partial`); [`adapt`] turns a call into the tagged
//! [`Identification`] the rest of the pipeline works with, absorbing
//! failures into `NoMatch`.

use crate::catalog::MeterCatalog;
use crate::models::{Identification, MeterMatch, Pattern};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifyError {
    #[error("pattern line {line} is invalid: {reason}")]
    InvalidPattern { line: usize, reason: String },

    #[error("meter catalog is unavailable: {0}")]
    CatalogUnavailable(String),
}

/// Raw identifier output: meter name -> metadata, for exact and partial matches
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct IdentificationResult {
    pub exact: BTreeMap<String, MeterMatch>,
    pub partial: BTreeMap<String, MeterMatch>,
}

impl IdentificationResult {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty()
    }
}

impl From<IdentificationResult> for Identification {
    /// `exact` wins over `partial` when both are present
    fn from(result: IdentificationResult) -> Self {
        if !result.exact.is_empty() {
            Identification::ExactMatch { meters: result.exact }
        } else if !result.partial.is_empty() {
            Identification::PartialMatch { meters: result.partial }
        } else {
            Identification::NoMatch
        }
    }
}

/// Catalog lookup for a verse given as per-line symbol-code strings
pub trait Identifier: Send + Sync {
    fn identify(&self, pattern_lines: &[String]) -> Result<IdentificationResult, IdentifyError>;
}

/// Run the identifier and normalize its result
pub fn adapt(identifier: &dyn Identifier, patterns: &[Pattern]) -> Identification {
    let lines: Vec<String> = patterns.iter().map(Pattern::to_string).collect();
    match identifier.identify(&lines) {
        Ok(result) => result.into(),
        Err(e) => {
            log::warn!("⚠️ meter identification failed: {}", e);
            Identification::NoMatch
        }
    }
}

// ============================================================================
// Catalog-backed identifier
// ============================================================================

/// Default identifier that compares the verse against every catalog template
///
/// - exact: the concatenated verse equals the expanded template
/// - partial: some line equals one of the template's padas or half-verses,
///   or the verse has the template's length and at least `min_similarity`
///   of its positions agree
#[derive(Debug, Clone)]
pub struct CatalogIdentifier {
    catalog: Arc<MeterCatalog>,
    min_similarity: f64,
}

impl CatalogIdentifier {
    pub fn new(catalog: Arc<MeterCatalog>, min_similarity: f64) -> Self {
        Self { catalog, min_similarity }
    }

    fn parse_lines(pattern_lines: &[String]) -> Result<Vec<Pattern>, IdentifyError> {
        pattern_lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                line.parse::<Pattern>().map_err(|e| IdentifyError::InvalidPattern {
                    line: i + 1,
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    fn similarity(observed: &Pattern, expected: &Pattern) -> f64 {
        if observed.is_empty() || observed.len() != expected.len() {
            return 0.0;
        }
        let same = observed.iter().zip(expected.iter()).filter(|(a, b)| a == b).count();
        same as f64 / observed.len() as f64
    }
}

impl Identifier for CatalogIdentifier {
    fn identify(&self, pattern_lines: &[String]) -> Result<IdentificationResult, IdentifyError> {
        let lines = Self::parse_lines(pattern_lines)?;
        let observed = Pattern::concat(&lines);
        let mut result = IdentificationResult::default();
        if observed.is_empty() {
            return Ok(result);
        }

        for entry in self.catalog.entries() {
            let template = match self.catalog.template(&entry.name) {
                Some(Ok(t)) => t,
                Some(Err(e)) => {
                    log::warn!("⚠️ skipping malformed meter during identification: {}", e);
                    continue;
                }
                None => continue,
            };
            let meta = MeterMatch {
                shape: template.shape(),
                description: entry.description.clone(),
            };

            let expected = template.expand();
            if observed == expected {
                log::debug!("  ✅ exact match: {}", entry.name);
                result.exact.insert(entry.name.clone(), meta);
                continue;
            }

            let halves = template.halves();
            let line_hit = lines.iter().filter(|l| !l.is_empty()).any(|line| {
                template.padas().iter().any(|p| *p == line) || halves.iter().any(|h| h == line)
            });
            if line_hit || Self::similarity(&observed, &expected) >= self.min_similarity {
                log::debug!("  ℹ️ partial match: {}", entry.name);
                result.partial.insert(entry.name.clone(), meta);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
- name: pramanika
  pattern: LGLGLGLG
- name: samanika
  pattern: GLGLGLGL
- name: viyogini
  pattern: [LLGLLGLGLG, LLGGLLGLGLG]
- name: broken
  pattern: [LG, GL, LL]
"#;

    fn identifier() -> CatalogIdentifier {
        let catalog = Arc::new(MeterCatalog::from_yaml_str(CATALOG).unwrap());
        CatalogIdentifier::new(catalog, 0.75)
    }

    fn lines(ps: &[&str]) -> Vec<String> {
        ps.iter().map(|p| p.to_string()).collect()
    }

    struct Failing;

    impl Identifier for Failing {
        fn identify(&self, _: &[String]) -> Result<IdentificationResult, IdentifyError> {
            Err(IdentifyError::CatalogUnavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_exact_match_by_padas() {
        let result = identifier()
            .identify(&lines(&["LGLGLGLG", "LGLGLGLG", "LGLGLGLG", "LGLGLGLG"]))
            .unwrap();
        assert!(result.exact.contains_key("pramanika"));
        assert!(result.partial.is_empty());
    }

    #[test]
    fn test_exact_match_by_half_verses() {
        let result = identifier()
            .identify(&lines(&["LLGLLGLGLGLLGGLLGLGLG", "LLGLLGLGLGLLGGLLGLGLG"]))
            .unwrap();
        assert_eq!(result.exact.keys().collect::<Vec<_>>(), vec!["viyogini"]);
    }

    #[test]
    fn test_partial_match_by_line() {
        let result = identifier()
            .identify(&lines(&["LGLGLGLG", "LGGGLGLG"]))
            .unwrap();
        assert!(result.exact.is_empty());
        assert!(result.partial.contains_key("pramanika"));
        assert!(!result.partial.contains_key("samanika"));
    }

    #[test]
    fn test_partial_match_by_similarity() {
        // Full length, one position off in every pada: 28/32 agree
        let result = identifier()
            .identify(&lines(&["LGLGLGLL", "LGLGLGLL", "LGLGLGLL", "LGLGLGLL"]))
            .unwrap();
        assert!(result.partial.contains_key("pramanika"));
    }

    #[test]
    fn test_empty_and_invalid_input() {
        assert!(identifier().identify(&[]).unwrap().is_empty());
        assert!(identifier().identify(&lines(&["", ""])).unwrap().is_empty());
        assert!(matches!(
            identifier().identify(&lines(&["LG", "LX"])),
            Err(IdentifyError::InvalidPattern { line: 2, .. })
        ));
    }

    #[test]
    fn test_adapt_normalizes_failure() {
        let patterns = vec!["LG".parse::<Pattern>().unwrap()];
        assert_eq!(adapt(&Failing, &patterns), Identification::NoMatch);
    }

    #[test]
    fn test_exact_takes_precedence() {
        let mut result = IdentificationResult::default();
        let meta = MeterMatch { shape: crate::models::ShapeKind::Sama, description: String::new() };
        result.exact.insert("a".to_string(), meta.clone());
        result.partial.insert("b".to_string(), meta);
        assert!(Identification::from(result).is_exact());
    }
}
