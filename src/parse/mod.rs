//! Parsing module for the meter verifier
//!
//! This module turns raw verse text into analyzable lines and per-line
//! syllable weight patterns.

pub mod preprocess;
pub mod syllabize;
pub mod patterns;

// Re-export commonly used types
pub use preprocess::{clean_verse, preprocess, Preprocessed};
pub use syllabize::{DevanagariSyllabizer, SyllabizeError, Syllabizer};
pub use patterns::{build_line, build_lines, pattern_lines};
