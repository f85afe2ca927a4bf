//! Error types for catalog loading
//!
//! Load errors are fatal for the catalog being loaded. Problems with a
//! single entry's pattern are `TemplateError`s and only surface when that
//! meter's template is requested.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog YAML is invalid: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("catalog JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Meter names must be unique
    #[error("meter '{0}' is defined more than once")]
    DuplicateMeter(String),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("catalog contains no meters")]
    Empty,
}
