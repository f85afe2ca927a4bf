// Catalog and config loading from files

use std::io::Write;

use chandas_wasm::catalog::BUILTIN_CATALOG_YAML;
use chandas_wasm::{
    CatalogError, ConfigError, MeterCatalog, MeterVerifier, RawPattern, ShapeKind, VerifierConfig,
};
use tempfile::Builder;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_builtin_catalog_is_well_formed() {
    let catalog = MeterCatalog::from_yaml_str(BUILTIN_CATALOG_YAML).expect("built-in catalog parses");
    assert!(catalog.len() >= 20);

    for name in catalog.meter_names() {
        let template = catalog.template(name).expect("listed meter has an entry");
        assert!(template.is_ok(), "built-in meter {} is malformed", name);
    }

    let info = catalog.meter_info("viyogini").unwrap();
    assert_eq!(info.shape, Some(ShapeKind::Ardhasama));
    assert_eq!(info.syllable_count, 42);

    let info = catalog.meter_info("mandakranta").unwrap();
    assert_eq!(info.shape, Some(ShapeKind::Sama));
    assert_eq!(info.syllable_count, 68);
}

#[test]
fn test_load_yaml_catalog_file() {
    let file = write_temp(
        ".yaml",
        "- name: pramanika\n  pattern: LGLGLGLG\n- name: odd\n  pattern: [LLG, GGL]\n",
    );
    let catalog = MeterCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains("odd"));
    assert_eq!(
        catalog.entry("odd").unwrap().pattern,
        RawPattern::List(vec!["LLG".to_string(), "GGL".to_string()])
    );
}

#[test]
fn test_load_json_catalog_file() {
    let file = write_temp(
        ".json",
        r#"[{"name": "samanika", "pattern": "GLGLGLGL", "description": "ra ja ga la"}]"#,
    );
    let catalog = MeterCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.describe("samanika"), Some("ra ja ga la"));
}

#[test]
fn test_catalog_errors() {
    let file = write_temp(".txt", "- name: x\n  pattern: L\n");
    assert!(matches!(MeterCatalog::from_path(file.path()), Err(CatalogError::UnsupportedFormat(_))));

    let dup = "- name: a\n  pattern: LG\n- name: a\n  pattern: GL\n";
    assert!(matches!(MeterCatalog::from_yaml_str(dup), Err(CatalogError::DuplicateMeter(name)) if name == "a"));

    assert!(matches!(MeterCatalog::from_yaml_str("[]"), Err(CatalogError::Empty)));
    assert!(matches!(MeterCatalog::from_yaml_str("name: [unclosed"), Err(CatalogError::Yaml(_))));
}

#[test]
fn test_config_file_drives_verifier() {
    let catalog = write_temp(".yml", "- name: pramanika\n  pattern: LGLGLGLG\n");
    let config = write_temp(
        ".yaml",
        &format!(
            "partial_confidence: 55.0\ncatalog_path: {}\n",
            catalog.path().display()
        ),
    );

    let config = VerifierConfig::from_path(config.path()).unwrap();
    assert_eq!(config.partial_confidence, 55.0);
    assert_eq!(config.partial_similarity, 0.75);

    let verifier = MeterVerifier::from_config(config).unwrap();
    assert_eq!(verifier.list_meters(), vec!["pramanika".to_string()]);
}

#[test]
fn test_json_config_and_validation() {
    let file = write_temp(".json", r#"{"partial_similarity": 0.9}"#);
    let config = VerifierConfig::from_path(file.path()).unwrap();
    assert_eq!(config.partial_similarity, 0.9);
    assert_eq!(config.partial_confidence, 70.0);

    let file = write_temp(".json", r#"{"partial_confidence": 120.0}"#);
    assert!(matches!(VerifierConfig::from_path(file.path()), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_missing_catalog_path_fails() {
    let config = VerifierConfig {
        catalog_path: Some("/nonexistent/meters.yaml".into()),
        ..Default::default()
    };
    assert!(MeterVerifier::from_config(config).is_err());
}
