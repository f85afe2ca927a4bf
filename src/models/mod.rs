//! Models module for the meter verifier
//!
//! This module contains the data model shared by the pipeline:
//! syllable weights, meter templates and the verification report.

pub mod weight;
pub mod template;
pub mod report;

// Re-export commonly used types
pub use weight::{InvalidSymbol, Pattern, Weight};
pub use template::{MeterTemplate, RawPattern, ShapeKind, TemplateError, PADAS_PER_VERSE};
pub use report::*;
