// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Policy output formats.
//!
//! ```text
//! VariantPolicy ──> text    aligned key = value, secrets hidden, plus [android]
//!               ──> json    serde_json, secrets hidden, plus [android]
//!               ──> gradle  -Pandroid.injected.signing.*, secrets exposed
//!               ──> build_config::render  BuildConfig.java
//! ```

pub mod build_config;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::config::types::AndroidConfig;
use crate::error::Result;
use crate::signing::{DebugKeystore, HIDDEN};
use crate::variant::{Signing, VariantPolicy};

/// Properties the Android Gradle plugin reads to sign an artifact.
pub const INJECTED_STORE_FILE: &str = "android.injected.signing.store.file";
pub const INJECTED_STORE_PASSWORD: &str = "android.injected.signing.store.password";
pub const INJECTED_KEY_ALIAS: &str = "android.injected.signing.key.alias";
pub const INJECTED_KEY_PASSWORD: &str = "android.injected.signing.key.password";

/// Human-readable policy, one `key = value` per line.
#[must_use]
pub fn text(policy: &VariantPolicy, config: &Config) -> Vec<String> {
    let mut lines = BTreeMap::new();
    lines.insert("variant".to_string(), policy.variant().to_string());
    lines.insert("minify".to_string(), policy.minify().to_string());
    lines.insert(
        "shrink_resources".to_string(),
        policy.shrink_resources().to_string(),
    );
    lines.insert("signing".to_string(), policy.signing().describe().to_string());

    let (store_file, key_alias) = signing_identity(policy.signing(), config);
    lines.insert("signing.store_file".to_string(), store_file.display().to_string());
    lines.insert("signing.key_alias".to_string(), key_alias.to_string());
    lines.insert("signing.store_password".to_string(), HIDDEN.to_string());
    lines.insert("signing.key_password".to_string(), HIDDEN.to_string());

    if !policy.proguard_files().is_empty() {
        let files: Vec<String> = policy
            .proguard_files()
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        lines.insert("proguard_files".to_string(), files.join(", "));
    }
    for field in policy.build_config_fields() {
        lines.insert(
            format!("build_config.{}", field.name),
            format!("{} ({})", field.value, field.java_type),
        );
    }

    let android = AndroidReport::new(&config.android);
    lines.insert("android.compile_sdk".to_string(), android.compile_sdk.to_string());
    lines.insert("android.min_sdk".to_string(), android.min_sdk.to_string());
    lines.insert("android.target_sdk".to_string(), android.target_sdk.to_string());
    lines.insert("android.java_version".to_string(), android.java_version.to_string());
    lines.insert("android.features".to_string(), android.features.join(" | "));
    if let Some(ndk) = android.ndk_version {
        lines.insert("android.ndk_version".to_string(), ndk.to_string());
    }
    if let Some(coordinates) = android.desugar_jdk_libs {
        lines.insert("android.desugar_jdk_libs".to_string(), coordinates.to_string());
    }

    let width = lines.keys().map(String::len).max().unwrap_or(0);
    lines
        .into_iter()
        .map(|(key, value)| format!("{key:<width$} = {value}"))
        .collect()
}

/// Module-wide build settings that apply to every variant.
#[derive(Serialize)]
struct AndroidReport<'a> {
    compile_sdk: u32,
    min_sdk: u32,
    target_sdk: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    ndk_version: Option<&'a str>,
    java_version: u32,
    features: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desugar_jdk_libs: Option<&'a str>,
}

impl<'a> AndroidReport<'a> {
    fn new(android: &'a AndroidConfig) -> Self {
        Self {
            compile_sdk: android.compile_sdk,
            min_sdk: android.min_sdk,
            target_sdk: android.target_sdk,
            ndk_version: android.ndk_version.as_deref(),
            java_version: android.java_version,
            features: android.features().names(),
            desugar_jdk_libs: android
                .core_library_desugaring
                .then_some(android.desugar_jdk_libs.as_str()),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    policy: &'a VariantPolicy,
    store_file: PathBuf,
    android: AndroidReport<'a>,
}

/// Pretty JSON document of the policy with the resolved keystore path and
/// the `[android]` settings.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn json(policy: &VariantPolicy, config: &Config) -> Result<String> {
    let (store_file, _) = signing_identity(policy.signing(), config);
    let report = JsonReport {
        policy,
        store_file,
        android: AndroidReport::new(&config.android),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// `-P` arguments that make Gradle sign with the resolved identity.
#[must_use]
pub fn gradle(policy: &VariantPolicy, config: &Config) -> Vec<String> {
    let (store_file, key_alias) = signing_identity(policy.signing(), config);
    let (store_password, key_password) = match policy.signing() {
        Signing::Release(credentials) => (
            credentials.store_password().expose(),
            credentials.key_password().expose(),
        ),
        Signing::Debug | Signing::DebugFallback => {
            (DebugKeystore::PASSWORD, DebugKeystore::PASSWORD)
        }
    };

    vec![
        format!("-P{INJECTED_STORE_FILE}={}", store_file.display()),
        format!("-P{INJECTED_STORE_PASSWORD}={store_password}"),
        format!("-P{INJECTED_KEY_ALIAS}={key_alias}"),
        format!("-P{INJECTED_KEY_PASSWORD}={key_password}"),
    ]
}

/// Keystore path and key alias the artifact will be signed with.
fn signing_identity<'a>(signing: &'a Signing, config: &Config) -> (PathBuf, &'a str) {
    match signing {
        Signing::Release(credentials) => (
            credentials.resolved_store_file(&config.project.module_dir),
            credentials.key_alias(),
        ),
        Signing::Debug | Signing::DebugFallback => (
            config.debug_keystore().store_file().to_path_buf(),
            DebugKeystore::KEY_ALIAS,
        ),
    }
}

/// Write `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns `FsError::IoError` if the directory or file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    use crate::error::FsError;

    let io_error = |source| FsError::IoError {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, content).map_err(io_error)?;
    Ok(())
}
