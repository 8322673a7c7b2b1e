// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for variant-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. variant.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. VARIANT_* env vars
//! 5. --set KEY=VALUE
//! 6. CLI flags (--key-properties, --allow-debug-signing)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VARIANT_SIGNING__ALLOW_DEBUG_SIGNING=true → signing.allow_debug_signing = true
//! VARIANT_ANDROID__MIN_SDK=24               → android.min_sdk = 24
//! VARIANT_PROJECT__VERSION_CODE=42          → project.version_code = 42
//! ```
//!
//! Sections are separated from keys by a double underscore because keys
//! themselves contain single underscores.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::signing::DebugKeystore;

use loader::ConfigLoader;
use types::{AndroidConfig, GlobalConfig, ProjectConfig, ReleaseConfig, SigningConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "variant.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Signing inputs.
    pub signing: SigningConfig,
    /// Application identity.
    pub project: ProjectConfig,
    /// SDK levels and build features.
    pub android: AndroidConfig,
    /// Release-only packaging inputs.
    pub release: ReleaseConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use variant_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("variant.toml")
    ///     .with_env_prefix("VARIANT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Config` structure, or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        self.project.validate()?;
        self.android.validate()?;
        Ok(())
    }

    /// Debug keystore for this configuration.
    #[must_use]
    pub fn debug_keystore(&self) -> DebugKeystore {
        DebugKeystore::locate(self.signing.debug_keystore.as_deref())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_signing_options(&mut options);
        self.format_project_options(&mut options);
        self.format_android_options(&mut options);
        self.format_release_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_signing_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "signing.key_properties".into(),
            self.signing.key_properties.display().to_string(),
        );
        options.insert(
            "signing.allow_debug_signing".into(),
            self.signing.allow_debug_signing.to_string(),
        );
        options.insert(
            "signing.debug_keystore".into(),
            self.debug_keystore().store_file().display().to_string(),
        );
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("project.namespace".into(), self.project.namespace.clone());
        options.insert(
            "project.application_id".into(),
            self.project.application_id.clone(),
        );
        options.insert(
            "project.module_dir".into(),
            self.project.module_dir.display().to_string(),
        );
        options.insert(
            "project.version_code".into(),
            self.project.version_code.to_string(),
        );
        options.insert(
            "project.version_name".into(),
            self.project.version_name.clone(),
        );
    }

    fn format_android_options(&self, options: &mut BTreeMap<String, String>) {
        let android = &self.android;
        options.insert("android.compile_sdk".into(), android.compile_sdk.to_string());
        options.insert("android.min_sdk".into(), android.min_sdk.to_string());
        options.insert("android.target_sdk".into(), android.target_sdk.to_string());
        if let Some(ndk) = &android.ndk_version {
            options.insert("android.ndk_version".into(), ndk.clone());
        }
        options.insert(
            "android.java_version".into(),
            android.java_version.to_string(),
        );
        options.insert(
            "android.features".into(),
            android.features().names().join(" | "),
        );
        if android.core_library_desugaring {
            options.insert(
                "android.desugar_jdk_libs".into(),
                android.desugar_jdk_libs.clone(),
            );
        }
    }

    fn format_release_options(&self, options: &mut BTreeMap<String, String>) {
        let files: Vec<String> = self
            .release
            .proguard_files
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        options.insert("release.proguard_files".into(), files.join(", "));
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
