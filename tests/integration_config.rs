// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use variant_rs::config::Config;
use variant_rs::config::loader::ConfigLoader;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.project.application_id, "com.example.app");
    assert_eq!(config.android.compile_sdk, 35);
    assert!(config.android.build_config);
}

#[test]
fn config_parse_full_project() {
    let toml = r#"
[global]
output_log_level = 2
log_file = "build/variant.log"

[signing]
key_properties = "../key.properties"

[project]
namespace = "com.directcuts.app"
application_id = "com.directcuts.app"
version_code = 120
version_name = "1.2.0"

[android]
compile_sdk = 35
min_sdk = 24
target_sdk = 34
java_version = 17
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level.as_u8(), 2);
    assert_eq!(config.global.log_file, Some(PathBuf::from("build/variant.log")));
    assert_eq!(
        config.signing.key_properties,
        PathBuf::from("../key.properties")
    );
    assert_eq!(config.project.version_code, 120);
    assert_eq!(config.android.target_sdk, 34);
}

#[test]
fn config_rejects_unknown_section() {
    assert!(Config::parse("[flavors]\npaid = true\n").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_win() {
    let mut base = NamedTempFile::new().expect("failed to create temp file");
    writeln!(base, "[android]\nmin_sdk = 21\ntarget_sdk = 33\n").expect("failed to write");
    let mut ci = NamedTempFile::new().expect("failed to create temp file");
    writeln!(ci, "[android]\nmin_sdk = 26\n").expect("failed to write");

    let loader = ConfigLoader::new()
        .add_toml_file(base.path())
        .add_toml_file(ci.path());
    assert_eq!(loader.format_loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.android.min_sdk, 26);
    assert_eq!(config.android.target_sdk, 33);
}

#[test]
fn config_set_beats_files() {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[signing]\nallow_debug_signing = false\n").expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .set_assignment("signing.allow_debug_signing=true")
        .unwrap()
        .build()
        .unwrap();
    assert!(config.signing.allow_debug_signing);
}

#[test]
fn config_validation_runs_after_merge() {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[android]\ncompile_sdk = 30\n").expect("failed to write");

    // target_sdk default (35) now exceeds compile_sdk
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("target_sdk (35) must not exceed compile_sdk (30)"));
}
