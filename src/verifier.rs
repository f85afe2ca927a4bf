//! Meter verifier
//!
//! Ties the pipeline together: preprocess -> syllabize -> identify ->
//! statistics / deviation analysis -> verdict. `verify` is stateless and
//! never fails; problems degrade into failed lines, `NoMatch`, skipped
//! reports or catalog faults inside the report.

use crate::analysis::compose_details;
use crate::catalog::{self, CatalogError, MeterCatalog, MeterInfo};
use crate::config::{ConfigError, VerifierConfig};
use crate::identify::{self, CatalogIdentifier, Identifier};
use crate::models::VerificationReport;
use crate::parse::{build_lines, pattern_lines, preprocess, DevanagariSyllabizer, Syllabizer};
use std::sync::Arc;
use thiserror::Error;

/// Errors constructing a verifier
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct MeterVerifier {
    catalog: Arc<MeterCatalog>,
    config: VerifierConfig,
    syllabizer: Box<dyn Syllabizer>,
    identifier: Box<dyn Identifier>,
}

impl MeterVerifier {
    /// Verifier over `catalog` with the default syllabizer and identifier
    pub fn new(catalog: Arc<MeterCatalog>, config: VerifierConfig) -> Self {
        let identifier = CatalogIdentifier::new(Arc::clone(&catalog), config.partial_similarity);
        Self {
            catalog,
            config,
            syllabizer: Box::new(DevanagariSyllabizer::new()),
            identifier: Box::new(identifier),
        }
    }

    /// Verifier over the configured catalog file, or the shared built-in catalog
    pub fn from_config(config: VerifierConfig) -> Result<Self, VerifyError> {
        config.validate()?;
        let catalog = match &config.catalog_path {
            Some(path) => Arc::new(MeterCatalog::from_path(path)?),
            None => catalog::initialize()?,
        };
        Ok(Self::new(catalog, config))
    }

    /// Built-in catalog with default settings
    pub fn with_defaults() -> Result<Self, VerifyError> {
        Self::from_config(VerifierConfig::default())
    }

    pub fn with_syllabizer(mut self, syllabizer: Box<dyn Syllabizer>) -> Self {
        self.syllabizer = syllabizer;
        self
    }

    pub fn with_identifier(mut self, identifier: Box<dyn Identifier>) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn catalog(&self) -> &MeterCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify a verse against the catalog
    pub fn verify(&self, verse: &str) -> VerificationReport {
        let pre = preprocess(verse);
        let syllable_info = build_lines(self.syllabizer.as_ref(), &pre.lines);
        let patterns = pattern_lines(&syllable_info);

        let identification = identify::adapt(self.identifier.as_ref(), &patterns);
        let verification_details = compose_details(
            &identification,
            &patterns,
            &self.catalog,
            self.config.partial_confidence,
        );

        log::info!(
            "verify: {} line(s), {} syllable(s), matched {:?}",
            pre.lines.len(),
            verification_details.pattern_statistics.total_syllables,
            verification_details.matched_meters
        );

        VerificationReport {
            input_verse: verse.to_string(),
            cleaned_verse: pre.cleaned,
            lines: pre.lines,
            syllable_info,
            pattern_lines: patterns,
            identification,
            verification_details,
        }
    }

    pub fn meter_info(&self, name: &str) -> Option<MeterInfo> {
        self.catalog.meter_info(name)
    }

    /// Meter names in catalog order
    pub fn list_meters(&self) -> Vec<String> {
        self.catalog.meter_names().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_verifier_lists_builtin_meters() {
        let verifier = MeterVerifier::with_defaults().unwrap();
        let meters = verifier.list_meters();
        assert!(meters.contains(&"mandakranta".to_string()));
        assert!(verifier.meter_info("mandakranta").is_some());
        assert!(verifier.meter_info("nonexistent").is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = VerifierConfig { partial_confidence: 150.0, ..Default::default() };
        assert!(matches!(MeterVerifier::from_config(config), Err(VerifyError::Config(_))));
    }
}
