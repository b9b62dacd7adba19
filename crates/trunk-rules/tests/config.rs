//! Tests for loading export configuration files.

use std::fs;

use trunk_model::OutputKind;
use trunk_rules::{ConfigSource, ExportConfig, RulesError};

#[test]
fn loads_config_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
[export]
generic_rids = true
outputs = ["table", "text-alias"]

[[exclusions]]
range_start = 0
range_end = 9999
label = "noise"

[[generic_labels]]
range_start = 2000000
range_end = 2009999
label = "FRNSW"
label_digits = 5
"#,
    )
    .expect("write config");

    let config = ExportConfig::load(&path).expect("load config");
    assert_eq!(config.source, ConfigSource::File(path.clone()));
    assert!(config.options.generic_rids);
    assert!(config.options.wants(OutputKind::TextAlias));
    assert!(!config.options.wants(OutputKind::MarkupAlias));
    assert!(config.rules.is_excluded(1234));
    assert_eq!(
        config.rules.generic_label_for("2001234").as_deref(),
        Some("FRNSW.01234")
    );
}

#[test]
fn missing_sections_mean_empty_tables() {
    let config =
        ExportConfig::from_toml_str("", ConfigSource::Embedded).expect("empty config is valid");
    assert!(config.rules.exclusions().is_empty());
    assert!(config.rules.generic_labels().is_empty());
    assert!(!config.options.generic_rids);
}

#[test]
fn overlapping_config_is_rejected() {
    let text = r#"
[[exclusions]]
range_start = 0
range_end = 100
label = "a"

[[exclusions]]
range_start = 50
range_end = 200
label = "b"
"#;
    let err = ExportConfig::from_toml_str(text, ConfigSource::Embedded).unwrap_err();
    assert!(matches!(err, RulesError::Overlap { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ExportConfig::from_toml_str("[exclusion]\nfoo = 1\n", ConfigSource::Embedded)
        .unwrap_err();
    assert!(matches!(err, RulesError::Toml { .. }));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = ExportConfig::load(&path).unwrap_err();
    assert!(matches!(err, RulesError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn fingerprint_tracks_content() {
    let a = ExportConfig::from_toml_str("", ConfigSource::Embedded).unwrap();
    let b = ExportConfig::from_toml_str("# changed\n", ConfigSource::Embedded).unwrap();
    assert_ne!(a.fingerprint, b.fingerprint);
}
