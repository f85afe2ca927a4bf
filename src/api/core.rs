//! WASM API for the meter verifier
//!
//! JavaScript-facing entry points. The module keeps one `MeterVerifier`,
//! created on first use over the shared built-in catalog and replaceable
//! through `loadCatalog`.

use wasm_bindgen::prelude::*;
use std::sync::{Arc, Mutex};
use lazy_static::lazy_static;

use crate::api::helpers::{api_error, serialize, validate_meter_name};
use crate::catalog::MeterCatalog;
use crate::config::VerifierConfig;
use crate::parse::{build_line, DevanagariSyllabizer};
use crate::verifier::MeterVerifier;
use crate::{wasm_info, wasm_log, wasm_warn};

// WASM-owned verifier (created lazily)
lazy_static! {
    static ref VERIFIER: Mutex<Option<MeterVerifier>> = Mutex::new(None);
}

/// Run `f` against the module verifier, creating it on first use
fn with_verifier<T>(f: impl FnOnce(&MeterVerifier) -> Result<T, JsValue>) -> Result<T, JsValue> {
    let mut guard = VERIFIER
        .lock()
        .map_err(|e| api_error(format!("Failed to lock verifier: {}", e)))?;

    if guard.is_none() {
        let verifier = MeterVerifier::with_defaults()
            .map_err(|e| api_error(format!("Failed to initialize verifier: {}", e)))?;
        wasm_info!("Verifier initialized with {} meters", verifier.catalog().len());
        *guard = Some(verifier);
    }

    let verifier = guard
        .as_ref()
        .ok_or_else(|| api_error("Verifier not initialized"))?;
    f(verifier)
}

/// Verify a verse and return the full report
#[wasm_bindgen(js_name = verifyVerse)]
pub fn verify_verse(verse: &str) -> Result<JsValue, JsValue> {
    wasm_info!("verifyVerse called: {} chars", verse.chars().count());
    with_verifier(|verifier| {
        let report = verifier.verify(verse);
        wasm_log!(
            "  valid={}, matched={:?}",
            report.verification_details.is_valid_meter,
            report.verification_details.matched_meters
        );
        serialize(&report, "Failed to serialize verification report")
    })
}

/// Names of all meters in the catalog
#[wasm_bindgen(js_name = listMeters)]
pub fn list_meters() -> Result<js_sys::Array, JsValue> {
    with_verifier(|verifier| {
        let names = js_sys::Array::new();
        for name in verifier.list_meters() {
            names.push(&JsValue::from_str(&name));
        }
        Ok(names)
    })
}

/// Catalog information for one meter, or `null` if unknown
#[wasm_bindgen(js_name = getMeterInfo)]
pub fn get_meter_info(name: &str) -> Result<JsValue, JsValue> {
    validate_meter_name(name).map_err(api_error)?;
    with_verifier(|verifier| match verifier.meter_info(name) {
        Some(info) => serialize(&info, "Failed to serialize meter info"),
        None => {
            wasm_warn!("getMeterInfo: unknown meter '{}'", name);
            Ok(JsValue::NULL)
        }
    })
}

/// Replace the verifier's catalog with YAML catalog data; returns the meter count
#[wasm_bindgen(js_name = loadCatalog)]
pub fn load_catalog(yaml: &str) -> Result<usize, JsValue> {
    let catalog = MeterCatalog::from_yaml_str(yaml)
        .map_err(|e| api_error(format!("Failed to load catalog: {}", e)))?;
    let count = catalog.len();

    let mut guard = VERIFIER
        .lock()
        .map_err(|e| api_error(format!("Failed to lock verifier: {}", e)))?;
    let verifier = with_catalog(guard.as_ref(), catalog);
    *guard = Some(verifier);

    wasm_info!("loadCatalog: {} meters loaded", count);
    Ok(count)
}

/// Verifier over `catalog` keeping the settings of the one it replaces
fn with_catalog(current: Option<&MeterVerifier>, catalog: MeterCatalog) -> MeterVerifier {
    let config = current
        .map(|v| v.config().clone())
        .unwrap_or_else(VerifierConfig::default);
    MeterVerifier::new(Arc::new(catalog), config)
}

/// Syllables and weight pattern for a single line
#[wasm_bindgen(js_name = scanLine)]
pub fn scan_line(line: &str) -> Result<JsValue, JsValue> {
    let analysis = build_line(&DevanagariSyllabizer::new(), line.trim());
    serialize(&analysis, "Failed to serialize line analysis")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "- name: pramanika\n  pattern: LGLGLGLG\n";

    #[test]
    fn test_catalog_swap_keeps_config() {
        let builtin = Arc::new(MeterCatalog::from_yaml_str(crate::catalog::BUILTIN_CATALOG_YAML).unwrap());
        let config = VerifierConfig { partial_confidence: 40.0, partial_similarity: 0.9, catalog_path: None };
        let current = MeterVerifier::new(builtin, config.clone());

        let swapped = with_catalog(Some(&current), MeterCatalog::from_yaml_str(CATALOG).unwrap());
        assert_eq!(swapped.config(), &config);
        assert_eq!(swapped.list_meters(), vec!["pramanika".to_string()]);
    }

    #[test]
    fn test_catalog_swap_without_verifier_uses_defaults() {
        let fresh = with_catalog(None, MeterCatalog::from_yaml_str(CATALOG).unwrap());
        assert_eq!(fresh.config(), &VerifierConfig::default());
    }
}
