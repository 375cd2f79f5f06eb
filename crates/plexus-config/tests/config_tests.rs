// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Plexus configuration system.

use std::io::Write;

use plexus_config::diagnostic::ConfigError;
use plexus_config::model::PlexusConfig;
use plexus_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_plexus_config() {
    let toml = r#"
[repository]
initial_capacity = 64

[parser]
max_descriptor_bytes = 8192
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.repository.initial_capacity, 64);
    assert_eq!(config.parser.max_descriptor_bytes, 8192);
}

/// Sections left out fall back to defaults.
#[test]
fn partial_toml_keeps_defaults() {
    let config = load_config_from_str("[parser]\nmax_descriptor_bytes = 100\n").unwrap();
    assert_eq!(config.repository.initial_capacity, 16);
    assert_eq!(config.parser.max_descriptor_bytes, 100);
}

/// Unknown field in [parser] produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_field_produces_suggestion() {
    let toml = r#"
[parser]
max_descriptor_byte = 10
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert!(key.ends_with("max_descriptor_byte"), "got key {key}");
            assert_eq!(suggestion.as_deref(), Some("max_descriptor_bytes"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level section is rejected.
#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[loader]\nenabled = true\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::UnknownKey { .. }));
}

/// Wrong value type produces an InvalidType diagnostic.
#[test]
fn wrong_type_produces_invalid_type() {
    let errors =
        load_and_validate_str("[repository]\ninitial_capacity = \"lots\"\n").unwrap_err();
    assert!(
        matches!(&errors[0], ConfigError::InvalidType { .. }),
        "got {:?}",
        errors[0]
    );
}

/// Semantic validation runs after deserialization.
#[test]
fn zero_capacity_fails_validation() {
    let errors = load_and_validate_str("[repository]\ninitial_capacity = 0\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

/// A config file on disk is loaded and validated.
#[test]
fn loads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[parser]\nmax_descriptor_bytes = 2048").unwrap();

    let config = load_and_validate_path(file.path()).unwrap();
    assert_eq!(config.parser.max_descriptor_bytes, 2048);
}

/// Serialized defaults load back to the same config.
#[test]
fn serialized_defaults_round_trip() {
    let rendered = toml::to_string(&PlexusConfig::default()).unwrap();
    let config = load_and_validate_str(&rendered).unwrap();
    assert_eq!(config, PlexusConfig::default());
}
