//! Meter verifier WASM API
//!
//! This module provides the JavaScript-facing API for the meter verifier.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `core`: The exported functions (`verifyVerse`, `listMeters`, `getMeterInfo`,
//!   `loadCatalog`, `scanLine`)

pub mod helpers;
pub mod core;

pub use self::core::*;
