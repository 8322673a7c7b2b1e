// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release signing credentials.
//!
//! ```text
//! key.properties ──missing──> None (debug fallback, not an error)
//!       │
//!       └─present─> Properties::from_bytes
//!                        │
//!                        ├─ syntax error ─────> ConfigError::ParseError
//!                        ├─ key absent/empty ─> ConfigError::ParseError
//!                        v
//!                 SigningCredentials { keyAlias, keyPassword,
//!                                      storeFile, storePassword }
//! ```
//!
//! Passwords are wrapped in [`Secret`] so they never reach logs or
//! `Debug` output by accident.

pub mod properties;


use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::ConfigError;
use properties::Properties;

pub const KEY_ALIAS: &str = "keyAlias";
pub const KEY_PASSWORD: &str = "keyPassword";
pub const STORE_FILE: &str = "storeFile";
pub const STORE_PASSWORD: &str = "storePassword";

const REQUIRED_KEYS: [&str; 4] = [KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD];

/// Marker printed instead of secret values.
pub const HIDDEN: &str = "[hidden]";

/// A string that is redacted from `Debug`, `Display` and `Serialize`.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw value. Only signing parameter output should call this.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HIDDEN)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HIDDEN)
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(HIDDEN)
    }
}

/// Release signing credentials loaded from `key.properties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningCredentials {
    key_alias: String,
    key_password: Secret,
    store_file: PathBuf,
    store_password: Secret,
}

impl SigningCredentials {
    pub fn new(
        key_alias: impl Into<String>,
        key_password: Secret,
        store_file: impl Into<PathBuf>,
        store_password: Secret,
    ) -> Self {
        Self {
            key_alias: key_alias.into(),
            key_password,
            store_file: store_file.into(),
            store_password,
        }
    }

    /// Build credentials from parsed properties.
    ///
    /// `source` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if any of the four keys is missing
    /// or empty.
    pub fn from_properties(props: &Properties, source: &Path) -> Result<Self, ConfigError> {
        let parse_error = |message: String| ConfigError::ParseError {
            path: source.display().to_string(),
            message,
        };

        let missing: Vec<&str> = REQUIRED_KEYS
            .into_iter()
            .filter(|key| props.get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(parse_error(format!(
                "missing required key(s): {}",
                missing.join(", ")
            )));
        }

        let require = |key: &str| -> Result<String, ConfigError> {
            match props.get(key) {
                Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
                _ => Err(parse_error(format!(
                    "line {}: key '{key}' has an empty value",
                    props.line_of(key).unwrap_or_default()
                ))),
            }
        };

        let credentials = Self {
            key_alias: require(KEY_ALIAS)?,
            key_password: Secret::new(require(KEY_PASSWORD)?),
            store_file: PathBuf::from(require(STORE_FILE)?),
            store_password: Secret::new(require(STORE_PASSWORD)?),
        };

        for key in props.keys().filter(|key| !REQUIRED_KEYS.contains(key)) {
            tracing::debug!(key, path = %source.display(), "ignoring unknown signing property");
        }

        Ok(credentials)
    }

    #[must_use]
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    #[must_use]
    pub const fn key_password(&self) -> &Secret {
        &self.key_password
    }

    /// `storeFile` exactly as written in the properties file.
    #[must_use]
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    #[must_use]
    pub const fn store_password(&self) -> &Secret {
        &self.store_password
    }

    /// Keystore path as the app module sees it: relative paths are
    /// resolved against `module_dir`.
    #[must_use]
    pub fn resolved_store_file(&self, module_dir: &Path) -> PathBuf {
        if self.store_file.is_absolute() {
            self.store_file.clone()
        } else {
            module_dir.join(&self.store_file)
        }
    }
}

/// Load signing credentials from `path`.
///
/// A missing file yields `Ok(None)`: that is the normal local-development
/// state and selects the debug-signing fallback.
///
/// # Errors
///
/// Returns `ConfigError::ReadError` if the file exists but cannot be read,
/// and `ConfigError::ParseError` if it is malformed or incomplete.
pub fn resolve_credentials(path: &Path) -> Result<Option<SigningCredentials>, ConfigError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no signing properties file");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let props = Properties::from_bytes(&bytes).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let credentials = SigningCredentials::from_properties(&props, path)?;

    tracing::debug!(
        path = %path.display(),
        key_alias = credentials.key_alias(),
        "loaded signing credentials"
    );
    Ok(Some(credentials))
}

/// The SDK-managed debug signing identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugKeystore {
    store_file: PathBuf,
}

impl DebugKeystore {
    pub const KEY_ALIAS: &'static str = "androiddebugkey";
    pub const PASSWORD: &'static str = "android";

    pub fn at(store_file: impl Into<PathBuf>) -> Self {
        Self {
            store_file: store_file.into(),
        }
    }

    /// Use `configured` if set, otherwise `$ANDROID_USER_HOME/debug.keystore`,
    /// otherwise `~/.android/debug.keystore`.
    #[must_use]
    pub fn locate(configured: Option<&Path>) -> Self {
        if let Some(path) = configured {
            return Self::at(path);
        }
        if let Some(user_home) = std::env::var_os("ANDROID_USER_HOME")
            && !user_home.is_empty()
        {
            return Self::at(PathBuf::from(user_home).join("debug.keystore"));
        }
        let android_dir = dirs::home_dir().map_or_else(
            || PathBuf::from(".android"),
            |home| home.join(".android"),
        );
        Self::at(android_dir.join("debug.keystore"))
    }

    #[must_use]
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }
}
