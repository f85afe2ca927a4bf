//! Sanskrit Meter Verification WASM Module
//!
//! Classifies a verse against a catalog of classical meters: exact match,
//! partial match with position-level deviations, or no match.
//! The same library backs the browser API (`api`) and the `chandas` CLI.

pub mod models;
pub mod parse;
pub mod catalog;
pub mod identify;
pub mod analysis;
pub mod config;
pub mod verifier;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use catalog::{CatalogError, MeterCatalog, MeterInfo};
pub use config::{ConfigError, VerifierConfig};
pub use identify::{CatalogIdentifier, IdentificationResult, Identifier, IdentifyError};
pub use parse::{DevanagariSyllabizer, SyllabizeError, Syllabizer};
pub use verifier::{MeterVerifier, VerifyError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }

    log::info!("Meter verification WASM module initialized");
}
