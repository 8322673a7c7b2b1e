// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, SigningConfig, ProjectConfig, AndroidConfig, ReleaseConfig
//! ```
//!
//! # Android Features
//!
//! ```text
//! AndroidFeatures: MULTIDEX | CORE_LIBRARY_DESUGARING
//!                | LEGACY_JNI_PACKAGING | BUILD_CONFIG
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::variant::DEFAULT_PROGUARD_FILES;

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Signing inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigningConfig {
    /// Release credentials file. Absence selects debug signing.
    pub key_properties: PathBuf,
    /// Accept a release build signed with the debug keystore.
    pub allow_debug_signing: bool,
    /// Debug keystore location override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_keystore: Option<PathBuf>,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            key_properties: PathBuf::from("key.properties"),
            allow_debug_signing: false,
            debug_keystore: None,
        }
    }
}

/// Application identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Java package of the generated `BuildConfig` class.
    pub namespace: String,
    pub application_id: String,
    /// App module directory; relative `storeFile` paths resolve against it.
    pub module_dir: PathBuf,
    pub version_code: u32,
    pub version_name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            namespace: "com.example.app".to_string(),
            application_id: "com.example.app".to_string(),
            module_dir: PathBuf::from("app"),
            version_code: 1,
            version_name: "1.0.0".to_string(),
        }
    }
}

impl ProjectConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.version_code == 0 {
            return Err(invalid("project", "version_code", "must be greater than 0"));
        }
        if self.version_name.trim().is_empty() {
            return Err(invalid("project", "version_name", "must not be empty"));
        }
        for (key, value) in [
            ("namespace", &self.namespace),
            ("application_id", &self.application_id),
        ] {
            if !is_package_name(value) {
                return Err(invalid(
                    "project",
                    key,
                    &format!("'{value}' is not a dotted package name like 'com.example.app'"),
                ));
            }
        }
        Ok(())
    }
}

bitflags! {
    /// Build features the app module turns on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AndroidFeatures: u8 {
        const MULTIDEX = 0b0001;
        const CORE_LIBRARY_DESUGARING = 0b0010;
        const LEGACY_JNI_PACKAGING = 0b0100;
        const BUILD_CONFIG = 0b1000;
    }
}

impl AndroidFeatures {
    /// Feature names for display, lowest bit first.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| name)
            .collect()
    }
}

/// SDK levels and build features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AndroidConfig {
    pub compile_sdk: u32,
    pub min_sdk: u32,
    pub target_sdk: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ndk_version: Option<String>,
    /// Java source/target compatibility and Kotlin `jvmTarget`.
    pub java_version: u32,
    pub multidex: bool,
    pub core_library_desugaring: bool,
    /// Maven coordinates of the desugaring library.
    pub desugar_jdk_libs: String,
    /// Package native libraries the legacy way (`useLegacyPackaging`).
    pub legacy_jni_packaging: bool,
    /// Generate the `BuildConfig` class.
    pub build_config: bool,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            compile_sdk: 35,
            min_sdk: 21,
            target_sdk: 35,
            ndk_version: None,
            java_version: 17,
            multidex: true,
            core_library_desugaring: true,
            desugar_jdk_libs: "com.android.tools:desugar_jdk_libs:2.0.4".to_string(),
            legacy_jni_packaging: true,
            build_config: true,
        }
    }
}

impl AndroidConfig {
    #[must_use]
    pub fn features(&self) -> AndroidFeatures {
        let mut features = AndroidFeatures::empty();
        features.set(AndroidFeatures::MULTIDEX, self.multidex);
        features.set(
            AndroidFeatures::CORE_LIBRARY_DESUGARING,
            self.core_library_desugaring,
        );
        features.set(
            AndroidFeatures::LEGACY_JNI_PACKAGING,
            self.legacy_jni_packaging,
        );
        features.set(AndroidFeatures::BUILD_CONFIG, self.build_config);
        features
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.min_sdk > self.target_sdk {
            return Err(invalid(
                "android",
                "min_sdk",
                &format!(
                    "min_sdk ({}) must not exceed target_sdk ({})",
                    self.min_sdk, self.target_sdk
                ),
            ));
        }
        if self.target_sdk > self.compile_sdk {
            return Err(invalid(
                "android",
                "target_sdk",
                &format!(
                    "target_sdk ({}) must not exceed compile_sdk ({})",
                    self.target_sdk, self.compile_sdk
                ),
            ));
        }
        if self.java_version < 8 {
            return Err(invalid(
                "android",
                "java_version",
                &format!("expected 8 or newer, got {}", self.java_version),
            ));
        }
        if self.core_library_desugaring && self.desugar_jdk_libs.split(':').count() != 3 {
            return Err(invalid(
                "android",
                "desugar_jdk_libs",
                &format!(
                    "expected 'group:artifact:version', got '{}'",
                    self.desugar_jdk_libs
                ),
            ));
        }
        Ok(())
    }
}

/// Release-only packaging inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// R8 rule files, in the order they are passed to the shrinker.
    pub proguard_files: Vec<PathBuf>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            proguard_files: DEFAULT_PROGUARD_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn is_package_name(value: &str) -> bool {
    let segments: Vec<&str> = value.split('.').collect();
    segments.len() >= 2
        && segments.iter().all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
