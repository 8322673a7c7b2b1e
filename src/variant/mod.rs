// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build variant policy resolution.
//!
//! # Variant Table
//!
//! ```text
//!             minify  shrink  ENABLE_DEBUG_LOGGING  signing
//! debug       false   false   true                  Debug
//! release     true    true    false                 Release(credentials)
//!                                                   | DebugFallback (+ WARN)
//! ```
//!
//! # Fail-Closed Signing
//!
//! ```text
//! resolve_policy() ──> VariantPolicy ──> enforce_signing(allow_debug_signing)
//!                                              |
//!                release + DebugFallback + !allow ──> SigningError
//! ```


use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SigningError, VariantError};
use crate::signing::SigningCredentials;

/// Name of the compile-time logging flag exposed through `BuildConfig`.
pub const ENABLE_DEBUG_LOGGING: &str = "ENABLE_DEBUG_LOGGING";

/// R8 rule files used when the configuration does not list any.
pub const DEFAULT_PROGUARD_FILES: [&str; 2] =
    ["proguard-android-optimize.txt", "proguard-rules.pro"];

/// Build type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    Debug,
    Release,
}

impl BuildVariant {
    pub const ALL: [Self; 2] = [Self::Debug, Self::Release];

    /// Build type name as Gradle spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    #[must_use]
    pub const fn is_release(self) -> bool {
        matches!(self, Self::Release)
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildVariant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            _ => Err(VariantError::Invalid(s.to_string())),
        }
    }
}

/// Which key signs the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signing {
    /// Release key from `key.properties`.
    Release(SigningCredentials),
    /// Debug keystore, chosen by the debug variant.
    Debug,
    /// Debug keystore, substituted because release credentials are missing.
    DebugFallback,
}

impl Signing {
    /// Either debug form.
    #[must_use]
    pub const fn is_debug(&self) -> bool {
        matches!(self, Self::Debug | Self::DebugFallback)
    }

    #[must_use]
    pub const fn is_debug_fallback(&self) -> bool {
        matches!(self, Self::DebugFallback)
    }

    #[must_use]
    pub const fn credentials(&self) -> Option<&SigningCredentials> {
        match self {
            Self::Release(credentials) => Some(credentials),
            Self::Debug | Self::DebugFallback => None,
        }
    }

    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Release(_) => "release",
            Self::Debug => "debug",
            Self::DebugFallback => "debug (fallback)",
        }
    }
}

/// A typed `buildConfigField(type, name, value)` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfigField {
    pub java_type: &'static str,
    pub name: &'static str,
    pub value: String,
}

impl BuildConfigField {
    #[must_use]
    pub fn boolean(name: &'static str, value: bool) -> Self {
        Self {
            java_type: "boolean",
            name,
            value: value.to_string(),
        }
    }
}

/// Everything the packaging toolchain needs to know about one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantPolicy {
    variant: BuildVariant,
    minify: bool,
    shrink_resources: bool,
    debug_logging_enabled: bool,
    signing: Signing,
    proguard_files: Vec<PathBuf>,
    build_config_fields: Vec<BuildConfigField>,
}

impl VariantPolicy {
    #[must_use]
    pub const fn variant(&self) -> BuildVariant {
        self.variant
    }

    #[must_use]
    pub const fn minify(&self) -> bool {
        self.minify
    }

    #[must_use]
    pub const fn shrink_resources(&self) -> bool {
        self.shrink_resources
    }

    #[must_use]
    pub const fn debug_logging_enabled(&self) -> bool {
        self.debug_logging_enabled
    }

    #[must_use]
    pub const fn signing(&self) -> &Signing {
        &self.signing
    }

    #[must_use]
    pub fn proguard_files(&self) -> &[PathBuf] {
        &self.proguard_files
    }

    #[must_use]
    pub fn build_config_fields(&self) -> &[BuildConfigField] {
        &self.build_config_fields
    }

    /// Replace the R8 rule files. Ignored when minification is off.
    #[must_use]
    pub fn with_proguard_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        if self.minify {
            self.proguard_files = files.into_iter().map(Into::into).collect();
        }
        self
    }
}

/// Derive the policy for `variant`.
///
/// The result depends only on the arguments. A release variant without
/// credentials gets [`Signing::DebugFallback`] and logs a warning; use
/// [`enforce_signing`] to turn that into an error.
#[must_use]
pub fn resolve_policy(
    variant: BuildVariant,
    credentials: Option<SigningCredentials>,
) -> VariantPolicy {
    match variant {
        BuildVariant::Release => {
            let signing = credentials.map_or_else(
                || {
                    tracing::warn!(
                        "release variant has no signing credentials, falling back to debug \
                         signing; this artifact must not be distributed"
                    );
                    Signing::DebugFallback
                },
                Signing::Release,
            );
            VariantPolicy {
                variant,
                minify: true,
                shrink_resources: true,
                debug_logging_enabled: false,
                signing,
                proguard_files: DEFAULT_PROGUARD_FILES.iter().map(PathBuf::from).collect(),
                build_config_fields: vec![BuildConfigField::boolean(ENABLE_DEBUG_LOGGING, false)],
            }
        }
        BuildVariant::Debug => VariantPolicy {
            variant,
            minify: false,
            shrink_resources: false,
            debug_logging_enabled: true,
            signing: Signing::Debug,
            proguard_files: Vec::new(),
            build_config_fields: vec![BuildConfigField::boolean(ENABLE_DEBUG_LOGGING, true)],
        },
    }
}

/// Reject a release policy that fell back to debug signing, unless the
/// operator explicitly allowed it.
///
/// # Errors
///
/// Returns `SigningError::DebugSigningNotAllowed` for a fallback release
/// policy when `allow_debug_signing` is false.
pub fn enforce_signing(
    policy: &VariantPolicy,
    allow_debug_signing: bool,
    key_properties: &Path,
) -> Result<(), SigningError> {
    if !policy.signing().is_debug_fallback() {
        return Ok(());
    }
    if allow_debug_signing {
        tracing::warn!(
            key_properties = %key_properties.display(),
            "debug signing explicitly allowed for a release build; do not distribute this artifact"
        );
        return Ok(());
    }
    Err(SigningError::DebugSigningNotAllowed {
        key_properties: key_properties.display().to_string(),
    })
}
