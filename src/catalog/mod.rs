//! Meter catalog
//!
//! Holds canonical templates and descriptions per meter name. The catalog
//! is immutable once loaded; the process-wide built-in catalog is loaded
//! at most once (see [`initialize`]) and handed out as `Arc<MeterCatalog>`.

mod errors;

pub use errors::CatalogError;

use crate::models::{MeterTemplate, RawPattern, ShapeKind, TemplateError};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Catalog data embedded at compile time
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../../data/meters.yaml");

static SHARED: OnceCell<Arc<MeterCatalog>> = OnceCell::new();

/// Load the built-in catalog once per process
///
/// Safe to call any number of times and from several threads; only the
/// first successful call parses the data.
pub fn initialize() -> Result<Arc<MeterCatalog>, CatalogError> {
    SHARED
        .get_or_try_init(|| {
            let catalog = MeterCatalog::from_yaml_str(BUILTIN_CATALOG_YAML)?;
            log::info!("📚 meter catalog initialized with {} meters", catalog.len());
            Ok(Arc::new(catalog))
        })
        .map(Arc::clone)
}

/// The shared catalog, if [`initialize`] has already succeeded
pub fn shared() -> Option<Arc<MeterCatalog>> {
    SHARED.get().map(Arc::clone)
}

/// One catalog entry as stored in data files
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub pattern: RawPattern,
    #[serde(default)]
    pub description: String,
}

/// Public information about a meter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeterInfo {
    pub name: String,
    pub pattern: RawPattern,
    /// `None` when the entry's pattern is malformed
    pub shape: Option<ShapeKind>,
    pub description: String,
    /// Syllables in a full four-pada verse
    pub syllable_count: usize,
}

/// Immutable set of meter entries, in data order
#[derive(Debug, Clone)]
pub struct MeterCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl MeterCatalog {
    /// Build from entries, rejecting duplicates and empty input
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateMeter(entry.name.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_yaml::from_str(yaml)?;
        Self::from_entries(entries)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a catalog file; the format follows the extension (.yaml/.yml/.json)
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let catalog = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => return Err(CatalogError::UnsupportedFormat(format!("'.{}' ({})", other, path.display()))),
        };
        log::info!("📚 loaded {} meters from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Meter names in catalog order
    pub fn meter_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Template for a meter: `None` when absent, `Some(Err)` when the entry is malformed
    pub fn template(&self, name: &str) -> Option<Result<MeterTemplate, TemplateError>> {
        self.entry(name)
            .map(|entry| MeterTemplate::from_raw(&entry.name, &entry.pattern))
    }

    pub fn describe(&self, name: &str) -> Option<&str> {
        self.entry(name).map(|e| e.description.as_str())
    }

    pub fn meter_info(&self, name: &str) -> Option<MeterInfo> {
        let entry = self.entry(name)?;
        let shape = MeterTemplate::from_raw(&entry.name, &entry.pattern)
            .ok()
            .map(|t| t.shape());
        Some(MeterInfo {
            name: entry.name.clone(),
            pattern: entry.pattern.clone(),
            shape,
            description: entry.description.clone(),
            syllable_count: entry.pattern.syllable_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
- name: totaka
  pattern: LLGLLGLLGLLG
  description: "sa sa sa sa"
- name: pushpitagra
  pattern: [LLLLLLGLGLGG, LLLLGLLGLGLGG]
- name: broken
  pattern: [LG, GL, LL]
"#;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = MeterCatalog::from_yaml_str(BUILTIN_CATALOG_YAML).unwrap();
        assert!(catalog.len() >= 20);
        for name in catalog.meter_names() {
            assert!(
                matches!(catalog.template(name), Some(Ok(_))),
                "built-in meter '{}' should have a valid template",
                name
            );
        }
    }

    #[test]
    fn test_template_lookup_outcomes() {
        let catalog = MeterCatalog::from_yaml_str(SMALL).unwrap();
        assert_eq!(catalog.meter_names().collect::<Vec<_>>(), vec!["totaka", "pushpitagra", "broken"]);

        assert_eq!(catalog.template("totaka").unwrap().unwrap().shape(), ShapeKind::Sama);
        assert_eq!(catalog.template("pushpitagra").unwrap().unwrap().shape(), ShapeKind::Ardhasama);
        assert!(matches!(
            catalog.template("broken"),
            Some(Err(TemplateError::InvalidShape { count: 3, .. }))
        ));
        assert!(catalog.template("missing").is_none());
    }

    #[test]
    fn test_describe_and_info() {
        let catalog = MeterCatalog::from_yaml_str(SMALL).unwrap();
        assert_eq!(catalog.describe("totaka"), Some("sa sa sa sa"));
        assert_eq!(catalog.describe("pushpitagra"), Some(""));

        let info = catalog.meter_info("totaka").unwrap();
        assert_eq!(info.syllable_count, 48);
        assert_eq!(info.shape, Some(ShapeKind::Sama));

        let broken = catalog.meter_info("broken").unwrap();
        assert_eq!(broken.shape, None);
    }

    #[test]
    fn test_duplicate_and_empty_rejected() {
        let dup = "- {name: a, pattern: LG}\n- {name: a, pattern: GL}\n";
        assert!(matches!(
            MeterCatalog::from_yaml_str(dup),
            Err(CatalogError::DuplicateMeter(name)) if name == "a"
        ));
        assert!(matches!(MeterCatalog::from_yaml_str("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"[{"name": "pramanika", "pattern": "LGLGLGLG"}]"#;
        let catalog = MeterCatalog::from_json_str(json).unwrap();
        assert!(catalog.contains("pramanika"));
    }

    #[test]
    fn test_initialize_concurrent_first_use() {
        let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(initialize)).collect();
        let catalogs: Vec<Arc<MeterCatalog>> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();

        for catalog in &catalogs {
            assert!(Arc::ptr_eq(catalog, &catalogs[0]), "every thread should see the same catalog");
        }
        assert!(Arc::ptr_eq(&shared().unwrap(), &catalogs[0]));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let first = initialize().unwrap();
        let second = initialize().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(shared().is_some());
    }
}
