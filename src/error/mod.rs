// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! command layer      anyhow::Result + .context()
//!        ^
//!        | ?
//! ConfigError    ReadError, ParseError, InvalidValue
//! VariantError   Invalid
//! SigningError   DebugSigningNotAllowed
//! FsError        IoError
//! ```
//!
//! `main` prints the whole chain as `Error: {e:#}`. Tests downcast to the
//! typed errors to tell the failure modes apart.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Config Errors ---

/// Configuration-related errors.
///
/// `ParseError` is the fatal "cannot trust the signing inputs" condition
/// raised for malformed `key.properties` files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Variant Errors ---

/// Build variant selection errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantError {
    /// Unrecognized build-type selector.
    #[error("unknown build variant '{0}' (expected 'debug' or 'release')")]
    Invalid(String),
}

// --- Signing Errors ---

/// Signing policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SigningError {
    /// A release policy fell back to debug signing without an explicit override.
    #[error(
        "release build would be signed with the debug keystore because '{key_properties}' \
         does not exist; create it or pass --allow-debug-signing"
    )]
    DebugSigningNotAllowed { key_properties: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
