// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::build_config::{relative_path, render};
use super::{gradle, json, text, write_file};
use crate::config::Config;
use crate::signing::{Secret, SigningCredentials};
use crate::variant::{BuildVariant, resolve_policy};

fn config() -> Config {
    Config::parse(
        r#"
[signing]
debug_keystore = "/home/dev/.android/debug.keystore"

[project]
namespace = "com.directcuts.app"
application_id = "com.directcuts.app"
module_dir = "app"
version_code = 12
version_name = "1.4.0"
"#,
    )
    .expect("test config should parse")
}

fn credentials() -> SigningCredentials {
    SigningCredentials::new(
        "upload",
        Secret::new("key-pass"),
        "/keys/upload.jks",
        Secret::new("store-pass"),
    )
}

#[test]
fn test_text_release_hides_secrets() {
    let policy = resolve_policy(BuildVariant::Release, Some(credentials()));
    let lines = text(&policy, &config());
    let joined = lines.join("\n");

    assert!(!joined.contains("key-pass"));
    assert!(!joined.contains("store-pass"));
    assert!(lines.iter().any(|l| l.starts_with("variant ") && l.ends_with("= release")));
    assert!(lines.iter().any(|l| l.starts_with("minify ") && l.ends_with("= true")));
    assert!(lines.iter().any(|l| l.ends_with("= /keys/upload.jks")));
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("build_config.ENABLE_DEBUG_LOGGING")
                && l.ends_with("= false (boolean)"))
    );
}

#[test]
fn test_text_fallback_names_debug_keystore() {
    let policy = resolve_policy(BuildVariant::Release, None);
    let lines = text(&policy, &config());
    assert!(lines.iter().any(|l| l.ends_with("= debug (fallback)")));
    assert!(lines.iter().any(|l| l.ends_with("= androiddebugkey")));
    assert!(
        lines
            .iter()
            .any(|l| l.ends_with("= /home/dev/.android/debug.keystore"))
    );
}

#[test]
fn test_text_debug_has_no_proguard_files() {
    let policy = resolve_policy(BuildVariant::Debug, None);
    let lines = text(&policy, &config());
    assert!(!lines.iter().any(|l| l.starts_with("proguard_files")));
}

#[test]
fn test_json_report() {
    let policy = resolve_policy(BuildVariant::Release, Some(credentials()));
    let rendered = json(&policy, &config()).expect("json should render");
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["variant"], "release");
    assert_eq!(value["minify"], true);
    assert_eq!(value["shrink_resources"], true);
    assert_eq!(value["debug_logging_enabled"], false);
    assert_eq!(value["store_file"], "/keys/upload.jks");
    assert_eq!(value["signing"]["keyPassword"], "[hidden]");
    assert_eq!(value["build_config_fields"][0]["name"], "ENABLE_DEBUG_LOGGING");
    assert!(!rendered.contains("store-pass"));
}

#[test]
fn test_text_reports_android_settings() {
    let policy = resolve_policy(BuildVariant::Release, Some(credentials()));
    let lines = text(&policy, &config());

    let line = |key: &str| {
        lines
            .iter()
            .find(|l| l.split(" = ").next().map(str::trim_end) == Some(key))
            .cloned()
            .unwrap_or_else(|| panic!("missing {key} in {lines:?}"))
    };
    assert!(line("android.compile_sdk").ends_with("= 35"));
    assert!(line("android.min_sdk").ends_with("= 21"));
    assert!(line("android.java_version").ends_with("= 17"));
    assert!(line("android.features").ends_with(
        "= MULTIDEX | CORE_LIBRARY_DESUGARING | LEGACY_JNI_PACKAGING | BUILD_CONFIG"
    ));
    assert!(line("android.desugar_jdk_libs").ends_with("= com.android.tools:desugar_jdk_libs:2.0.4"));
    assert!(!lines.iter().any(|l| l.starts_with("android.ndk_version")));
}

#[test]
fn test_json_reports_android_settings() {
    let mut config = config();
    config.android.min_sdk = 24;
    config.android.ndk_version = Some("27.0.12077973".to_string());
    config.android.multidex = false;
    config.android.core_library_desugaring = false;

    let policy = resolve_policy(BuildVariant::Debug, None);
    let rendered = json(&policy, &config).expect("json should render");
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    let android = &value["android"];
    assert_eq!(android["compile_sdk"], 35);
    assert_eq!(android["min_sdk"], 24);
    assert_eq!(android["target_sdk"], 35);
    assert_eq!(android["ndk_version"], "27.0.12077973");
    assert_eq!(android["java_version"], 17);
    assert_eq!(
        android["features"],
        serde_json::json!(["LEGACY_JNI_PACKAGING", "BUILD_CONFIG"])
    );
    assert!(android.get("desugar_jdk_libs").is_none());
}

#[test]
fn test_gradle_release_exposes_credentials() {
    let policy = resolve_policy(BuildVariant::Release, Some(credentials()));
    assert_eq!(
        gradle(&policy, &config()),
        vec![
            "-Pandroid.injected.signing.store.file=/keys/upload.jks",
            "-Pandroid.injected.signing.store.password=store-pass",
            "-Pandroid.injected.signing.key.alias=upload",
            "-Pandroid.injected.signing.key.password=key-pass",
        ]
    );
}

#[test]
fn test_gradle_debug_uses_debug_keystore() {
    let policy = resolve_policy(BuildVariant::Debug, Some(credentials()));
    assert_eq!(
        gradle(&policy, &config()),
        vec![
            "-Pandroid.injected.signing.store.file=/home/dev/.android/debug.keystore",
            "-Pandroid.injected.signing.store.password=android",
            "-Pandroid.injected.signing.key.alias=androiddebugkey",
            "-Pandroid.injected.signing.key.password=android",
        ]
    );
}

#[test]
fn test_relative_store_file_resolves_against_module_dir() {
    let relative = SigningCredentials::new(
        "upload",
        Secret::new("k"),
        "upload.jks",
        Secret::new("s"),
    );
    let policy = resolve_policy(BuildVariant::Release, Some(relative));
    let lines = gradle(&policy, &config());
    let expected = PathBuf::from("app").join("upload.jks");
    assert_eq!(
        lines[0],
        format!(
            "-Pandroid.injected.signing.store.file={}",
            expected.display()
        )
    );
}

#[test]
fn test_build_config_release() {
    let policy = resolve_policy(BuildVariant::Release, Some(credentials()));
    insta::assert_snapshot!(render(&policy, &config().project), @r#"
    /**
     * Automatically generated file. DO NOT MODIFY
     */
    package com.directcuts.app;

    public final class BuildConfig {
      public static final boolean DEBUG = false;
      public static final String APPLICATION_ID = "com.directcuts.app";
      public static final String BUILD_TYPE = "release";
      public static final int VERSION_CODE = 12;
      public static final String VERSION_NAME = "1.4.0";
      // Field from build type: release
      public static final boolean ENABLE_DEBUG_LOGGING = false;
    }
    "#);
}

#[test]
fn test_build_config_debug() {
    let policy = resolve_policy(BuildVariant::Debug, None);
    let source = render(&policy, &config().project);
    assert!(source.contains("public static final boolean DEBUG = true;"));
    assert!(source.contains("public static final String BUILD_TYPE = \"debug\";"));
    assert!(source.contains("public static final boolean ENABLE_DEBUG_LOGGING = true;"));
}

#[test]
fn test_build_config_escapes_strings() {
    let mut project = config().project;
    project.version_name = "1.0 \"beta\"\\x".to_string();
    let policy = resolve_policy(BuildVariant::Debug, None);
    let source = render(&policy, &project);
    assert!(source.contains(r#"VERSION_NAME = "1.0 \"beta\"\\x";"#));
}

#[test]
fn test_relative_path() {
    assert_eq!(
        relative_path("com.directcuts.app"),
        PathBuf::from("com/directcuts/app/BuildConfig.java")
    );
}

#[test]
fn test_write_file_creates_parents() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let target = dir.path().join("gen").join("BuildConfig.java");
    write_file(&target, "class X {}\n").expect("write should succeed");
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "class X {}\n");
}
