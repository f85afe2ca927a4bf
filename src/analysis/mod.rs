//! Analysis module for the meter verifier
//!
//! Statistics, deviation analysis against candidate templates, and the
//! composition of the final verification verdict.

pub mod statistics;
pub mod deviation;
pub mod composer;

pub use statistics::pattern_statistics;
pub use deviation::{analyze_candidates, analyze_deviation, locate};
pub use composer::compose_details;
